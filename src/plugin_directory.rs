//! Directory scan configuration.

use std::path::{ Path, PathBuf };

use crate::action_loader::{ ActionLoader, Ineligibility };
use crate::directory::{ DefaultDirectoryLister, DirectoryListing, ListingError };
use crate::loader::{ Loader, LoadError };
use crate::runtime::{ HostRuntime, RuntimeEnvironment };
use crate::utils::PartialResult ;



/// Search pattern used for module files when none is configured.
pub const DEFAULT_PATTERN: &str = "*.plugin" ;

/// Search pattern used for module files on an alternate runtime when none is configured.
pub const ALTERNATE_RUNTIME_PATTERN: &str = "*.wasm" ;

/// A directory of module files to scan for plugins.
///
/// # Example
///
/// ```no_run
/// use plugin_loaders::{ CatalogModuleLoader, Loader, ModuleActionLoader, PluginActionLoader, PluginDirectory };
///
/// #[derive( Default )]
/// struct App ;
///
/// let modules = ModuleActionLoader::new( CatalogModuleLoader::from_registry() )
/// 	.with_type_loader( PluginActionLoader::<App>::new() );
///
/// let mut loader = Loader::<App>::new();
/// let ( added, skipped ) = PluginDirectory::new( "./plugins" )
/// 	.with_pattern( "*.plugin" )
/// 	.scan( &mut loader, &[ &modules ])
/// 	.map_err(|( err, _ )| err )?;
/// # Ok::<(), plugin_loaders::LoadError>(())
/// ```
#[derive( Debug, Clone )]
pub struct PluginDirectory<D = DefaultDirectoryLister> {
	path: PathBuf,
	pattern: Option<String>,
	lister: D,
}

impl PluginDirectory {
	/// A directory scanned with the [`DefaultDirectoryLister`] and the default pattern.
	pub fn new( path: impl Into<PathBuf> ) -> Self {
		Self { path: path.into(), pattern: None, lister: DefaultDirectoryLister }
	}
}

impl<D: DirectoryListing> PluginDirectory<D> {

	/// Overrides the search pattern module files are matched against.
	pub fn with_pattern( mut self, pattern: impl Into<String> ) -> Self {
		self.pattern = Some( pattern.into() );
		self
	}

	/// Replaces the directory lister.
	pub fn with_lister<N: DirectoryListing>( self, lister: N ) -> PluginDirectory<N> {
		PluginDirectory { path: self.path, pattern: self.pattern, lister }
	}

	#[inline] pub fn path( &self ) -> &Path { &self.path }

	/// The configured pattern, or the default for the current process's runtime.
	pub fn pattern( &self ) -> &str { self.pattern_for( &HostRuntime ) }

	/// The configured pattern, or the default for `runtime`.
	pub fn pattern_for( &self, runtime: &impl RuntimeEnvironment ) -> &str {
		match ( &self.pattern, runtime.is_alternate_runtime() ) {
			( Some( pattern ), _ ) => pattern.as_str(),
			( None, true ) => ALTERNATE_RUNTIME_PATTERN,
			( None, false ) => DEFAULT_PATTERN,
		}
	}

	/// Lists the module files of this directory.
	///
	/// # Errors
	/// Fails if the directory cannot be listed or the pattern is invalid.
	pub fn files( &self ) -> Result<Vec<PathBuf>, ListingError> {
		self.lister.list_files( &self.path, self.pattern() )
	}

	/// Runs every module file of this directory through `loaders`, appending to `loader`.
	///
	/// # Partial Success
	/// Module files that fail to load are skipped and returned as warnings.
	///
	/// # Errors
	/// Fails without appending anything if the directory cannot be listed or an
	/// eligible module fails to produce its actions.
	pub fn scan<T>(
		&self,
		loader: &mut Loader<T>,
		loaders: &[&dyn ActionLoader<T, Path>],
	) -> PartialResult<usize, LoadError, Ineligibility> {

		let files = self.files().map_err(| err | ( LoadError::Listing( err ), Vec::with_capacity( 0 )))?;
		let result = loader.discover( files, loaders );

		if let Ok(( added, warnings )) = &result {
			tracing::debug!(
				directory = %self.path.display(),
				added,
				skipped = warnings.len(),
				"Scanned plugin directory"
			);
		}
		result

	}

}
