//! Self-registration of candidate types.
//!
//! Types opt into discovery at program initialisation by submitting a
//! [`Registration`] through [`register_type!`]( crate::register_type ). A [`Catalog`]
//! groups registrations by module name and hands them out as [`Module`]s, resolving
//! each descriptor's module dependencies on the way. [`CatalogModuleLoader`] exposes
//! the catalog through the [`ModuleLoader`] interface, treating module files on disk
//! as handles naming a catalog module.

use std::collections::BTreeMap ;
use std::ffi::OsStr ;
use std::path::Path ;
use itertools::Itertools ;
use pipe_trait::Pipe ;

use crate::descriptor::{ InspectError, TypeDescriptor };
use crate::module::{ Module, ModuleLoader, ModuleLoadError };



/// A link-time registration of one candidate type.
///
/// Submitted with [`register_type!`]( crate::register_type ) and collected by
/// [`Catalog::from_registry`].
#[derive( Debug )]
pub struct Registration {
	module: &'static str,
	descriptor: fn() -> TypeDescriptor,
}

impl Registration {

	pub const fn new( module: &'static str, descriptor: fn() -> TypeDescriptor ) -> Self {
		Self { module, descriptor }
	}

	#[inline] pub fn module( &self ) -> &'static str { self.module }

	/// Builds the registered descriptor.
	#[inline] pub fn descriptor( &self ) -> TypeDescriptor { ( self.descriptor )() }

}

inventory::collect!( Registration );

/// Registers a type descriptor under a module name at program initialisation.
///
/// The descriptor expression is evaluated lazily, each time a catalog is collected
/// with [`Catalog::from_registry`]( crate::Catalog::from_registry ).
///
/// ```
/// use plugin_loaders::{ register_type, Catalog, TypeDescriptor };
///
/// #[derive( Default )]
/// struct Audit ;
///
/// register_type!( "audit", TypeDescriptor::builder::<Audit>( "Audit" ).default_constructor().build() );
///
/// fn main() {
/// 	let catalog = Catalog::from_registry();
/// 	let module = catalog.module( "audit" ).unwrap();
/// 	assert_eq!( module.descriptors()[0].name(), "Audit" );
/// }
/// ```
#[macro_export]
macro_rules! register_type {
	( $module:literal, $descriptor:expr $(,)? ) => {
		$crate::inventory::submit! {
			$crate::Registration::new( $module, || $descriptor )
		}
	};
}

/// An in-memory registry of type descriptors, grouped by module name.
#[derive( Debug, Clone, Default )]
pub struct Catalog {
	modules: BTreeMap<String, Vec<TypeDescriptor>>,
}

impl Catalog {

	pub fn new() -> Self { Self::default() }

	/// Collects every registration submitted with [`register_type!`]( crate::register_type ).
	///
	/// Link order is unspecified, so descriptors are sorted by name within each module.
	pub fn from_registry() -> Self {
		inventory::iter::<Registration>.into_iter()
			.map(| registration | ( registration.module(), registration.descriptor() ))
			.into_group_map()
			.into_iter()
			.map(|( module, descriptors )| ( module.to_string(), descriptors.into_iter()
				.sorted_by(| a, b | a.name().cmp( b.name() ))
				.collect()
			))
			.collect::<BTreeMap<_, _>>()
			.pipe(| modules | Self { modules })
	}

	/// Appends a descriptor to a module, creating the module if needed.
	pub fn register( &mut self, module: impl Into<String>, descriptor: TypeDescriptor ) -> &mut Self {
		self.modules.entry( module.into() ).or_default().push( descriptor );
		self
	}

	/// Builder flavour of [`register`]( Self::register ).
	pub fn with( mut self, module: impl Into<String>, descriptor: TypeDescriptor ) -> Self {
		self.register( module, descriptor );
		self
	}

	pub fn module_names( &self ) -> impl Iterator<Item = &str> { self.modules.keys().map( String::as_str ) }

	#[inline] pub fn contains( &self, module: &str ) -> bool { self.modules.contains_key( module ) }

	/// Materialises a module.
	///
	/// A descriptor requiring a module this catalog does not contain is handed out
	/// faulted with [`InspectError::ModuleNotFound`].
	pub fn module( &self, name: &str ) -> Option<Module> {
		let descriptors = self.modules.get( name )?;
		Some( Module::new( name, descriptors.iter().cloned().map(| descriptor | self.resolve( descriptor ))))
	}

	fn resolve( &self, descriptor: TypeDescriptor ) -> TypeDescriptor {
		if descriptor.is_faulted() { return descriptor }
		let missing = descriptor.requires()
			.find(| module | !self.contains( module ))
			.map( str::to_string );
		match missing {
			None => descriptor,
			Some( module ) => {
				let error = InspectError::ModuleNotFound { type_name: descriptor.name().to_string(), module };
				descriptor.into_faulted( error )
			},
		}
	}

}

/// Resolves module files against a [`Catalog`].
///
/// The file must exist; its stem names the catalog module. The file's contents are not read.
#[derive( Debug, Clone, Default )]
pub struct CatalogModuleLoader {
	catalog: Catalog,
}

impl CatalogModuleLoader {

	pub fn new( catalog: Catalog ) -> Self { Self { catalog }}

	/// A loader over every registration submitted with [`register_type!`]( crate::register_type ).
	pub fn from_registry() -> Self { Self::new( Catalog::from_registry() ) }

	#[inline] pub fn catalog( &self ) -> &Catalog { &self.catalog }

}

impl ModuleLoader for CatalogModuleLoader {
	fn load( &self, path: &Path ) -> Result<Module, ModuleLoadError> {

		if !path.is_file() { return Err( ModuleLoadError::NotFound { path: path.to_path_buf() }) }

		let name = path.file_stem().and_then( OsStr::to_str ).ok_or_else(|| ModuleLoadError::LoadFailed {
			path: path.to_path_buf(),
			reason: "module file name is not valid UTF-8".to_string(),
		})?;

		match self.catalog.module( name ) {
			Some( module ) => Ok( module.with_path( path )),
			None => Err( ModuleLoadError::LoadFailed {
				path: path.to_path_buf(),
				reason: format!( "no module named '{}' is registered", name ),
			}),
		}

	}
}
