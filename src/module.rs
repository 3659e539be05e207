//! Loadable modules: named groups of type descriptors backed by a file.

use std::path::{ Path, PathBuf };
use thiserror::Error ;

use crate::descriptor::TypeDescriptor ;
use crate::source::TypeDescriptorSource ;



/// Failures raised while turning a path into a [`Module`].
///
/// Both are recoverable: a module that fails to load is skipped, never fatal to a scan.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum ModuleLoadError {
	/// No file exists at the given path.
	#[error( "Module file not found: {}", .path.display() )]
	NotFound { path: PathBuf },
	/// The file exists but could not be resolved into a module.
	#[error( "Failed to load module {}: {reason}", .path.display() )]
	LoadFailed { path: PathBuf, reason: String },
}

/// A named group of type descriptors, enumerated in registration order.
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct Module {
	name: String,
	path: Option<PathBuf>,
	descriptors: Vec<TypeDescriptor>,
}

impl Module {

	pub fn new( name: impl Into<String>, descriptors: impl IntoIterator<Item = TypeDescriptor> ) -> Self {
		Self { name: name.into(), path: None, descriptors: descriptors.into_iter().collect() }
	}

	/// Records the file this module was loaded from.
	pub fn with_path( mut self, path: impl Into<PathBuf> ) -> Self {
		self.path = Some( path.into() );
		self
	}

	#[inline] pub fn name( &self ) -> &str { &self.name }

	/// The file this module was loaded from, if any.
	#[inline] pub fn path( &self ) -> Option<&Path> { self.path.as_deref() }

	#[inline] pub fn descriptors( &self ) -> &[TypeDescriptor] { &self.descriptors }

}

impl TypeDescriptorSource for Module {
	type Iter<'a> = std::slice::Iter<'a, TypeDescriptor> ;
	fn enumerate( &self ) -> Self::Iter<'_> { self.descriptors.iter() }
}

/// Turns a file path into an in-memory [`Module`].
///
/// Implemented for closures, which is convenient for tests and one-off sources.
pub trait ModuleLoader {
	/// Loads the module stored at `path`.
	///
	/// # Errors
	/// [`ModuleLoadError::NotFound`] if nothing exists at `path`,
	/// [`ModuleLoadError::LoadFailed`] if it cannot be resolved into a module.
	fn load( &self, path: &Path ) -> Result<Module, ModuleLoadError> ;
}

impl<F> ModuleLoader for F
where
	F: Fn( &Path ) -> Result<Module, ModuleLoadError>,
{
	fn load( &self, path: &Path ) -> Result<Module, ModuleLoadError> { self( path ) }
}
