//! Directory listing.

use std::path::{ Path, PathBuf };
use globset::Glob ;
use itertools::Itertools ;
use thiserror::Error ;



/// Failures raised while listing a directory.
#[derive( Error, Debug )]
pub enum ListingError {
	/// The directory or one of its entries could not be read.
	#[error( "Failed to read directory {}: {source}", .path.display() )]
	Io { path: PathBuf, source: std::io::Error },
	/// The search pattern is not a valid glob.
	#[error( "Invalid search pattern: {0}" )] Pattern( #[from] globset::Error ),
}

/// Lists the files of a directory matching a search pattern.
pub trait DirectoryListing {
	/// Returns the files directly inside `path` whose names match `pattern`.
	///
	/// # Errors
	/// Fails if `pattern` is invalid or the directory cannot be read.
	fn list_files( &self, path: &Path, pattern: &str ) -> Result<Vec<PathBuf>, ListingError> ;
}

/// Lists files through the filesystem, matching file names against a glob.
///
/// Does not recurse. Results are sorted, so a scan over the same directory always
/// visits files in the same order.
#[derive( Debug, Clone, Copy, Default )]
pub struct DefaultDirectoryLister ;

impl DirectoryListing for DefaultDirectoryLister {
	fn list_files( &self, path: &Path, pattern: &str ) -> Result<Vec<PathBuf>, ListingError> {

		let matcher = Glob::new( pattern )?.compile_matcher();
		let io_error = | source: std::io::Error | ListingError::Io { path: path.to_path_buf(), source };

		let mut files = std::fs::read_dir( path ).map_err( io_error )?
			.map(| entry | entry.map_err( io_error ))
			.filter_ok(| entry | matcher.is_match( entry.file_name() ))
			.map_ok(| entry | entry.path() )
			.filter_ok(| file | file.is_file() )
			.collect::<Result<Vec<_>, _>>()?;

		files.sort();
		Ok( files )

	}
}
