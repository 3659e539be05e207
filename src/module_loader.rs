//! Module-level action loading.
//!
//! [`ModuleActionLoader`] lifts type-level [`ActionLoader`]s to module files: a path
//! is eligible when its module loads, and loading it runs every type-level loader
//! over every descriptor of the module. During discovery each module is loaded once
//! and the warnings of its descriptors are reported alongside those of the scan.

use std::path::Path ;

use crate::action::{ Action, ActionError };
use crate::action_loader::{ ActionLoader, Eligibility, Ineligibility };
use crate::catalog::CatalogModuleLoader ;
use crate::loader::collect_actions ;
use crate::module::ModuleLoader ;
use crate::utils::PartialResult ;



/// Loads the actions of every type found in a module file.
///
/// # Type Parameters
/// - `T`: Target type the produced actions configure
/// - `L`: [`ModuleLoader`] resolving paths into modules
pub struct ModuleActionLoader<T, L = CatalogModuleLoader> {
	module_loader: L,
	type_loaders: Vec<Box<dyn ActionLoader<T>>>,
}

impl<T, L: ModuleLoader> ModuleActionLoader<T, L> {

	/// Creates a module action loader with no type-level loaders.
	pub fn new( module_loader: L ) -> Self {
		Self { module_loader, type_loaders: Vec::new() }
	}

	/// Adds a type-level loader. Loaders run in the order they were added.
	pub fn with_type_loader( mut self, loader: impl ActionLoader<T> + 'static ) -> Self {
		self.type_loaders.push( Box::new( loader ));
		self
	}

	#[inline] pub fn module_loader( &self ) -> &L { &self.module_loader }

}

impl<T, L> std::fmt::Debug for ModuleActionLoader<T, L>
where
	L: std::fmt::Debug,
{
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ModuleActionLoader" )
			.field( "module_loader", &self.module_loader )
			.field( "type_loaders", &self.type_loaders.len() )
			.finish()
	}
}

impl<T, L: ModuleLoader> ActionLoader<T, Path> for ModuleActionLoader<T, L> {

	fn probe( &self, path: &Path ) -> Eligibility {
		self.module_loader.load( path )
			.map(| _ | ())
			.map_err( Ineligibility::Module )
			.into()
	}

	/// Loads the module and collects the actions of its descriptors.
	///
	/// A module that fails to load yields no actions. Use
	/// [`load_partial`]( ActionLoader::load_partial ) to also learn why.
	fn load( &self, path: &Path ) -> Result<Vec<Action<T>>, ActionError> {
		self.load_partial( path )
			.map(|( actions, _ )| actions )
			.map_err(|( err, _ )| err )
	}

	/// Loads the module once, reporting a load failure as [`Ineligibility::Module`]
	/// and passing on the warnings of every descriptor that could not be inspected.
	fn load_partial( &self, path: &Path ) -> PartialResult<Vec<Action<T>>, ActionError, Ineligibility> {

		let module = match self.module_loader.load( path ) {
			Ok( module ) => module,
			Err( err ) => return Ok(( Vec::with_capacity( 0 ), Ineligibility::Module( err ).into_warnings() )),
		};

		let type_loaders = self.type_loaders.iter()
			.map(| loader | loader.as_ref() )
			.collect::<Vec<_>>();

		let ( actions, warnings ) = collect_actions( module.descriptors(), &type_loaders )?;
		tracing::debug!( module = module.name(), actions = actions.len(), skipped = warnings.len(), "Loaded module" );
		Ok(( actions, warnings ))

	}

}
