use std::fs::{ self, File };
use pretty_assertions::assert_eq ;
use plugin_loaders::{
	DefaultDirectoryLister, DirectoryListing, HostRuntime, ListingError, PluginDirectory, RuntimeEnvironment,
	ALTERNATE_RUNTIME_PATTERN, DEFAULT_PATTERN,
};

#[test]
fn directory_listing_test_matches_pattern_sorted() {

	let dir = tempfile::tempdir().unwrap();
	for name in [ "zeta.plugin", "alpha.plugin", "notes.txt" ] {
		File::create( dir.path().join( name )).unwrap();
	}
	fs::create_dir( dir.path().join( "nested.plugin" )).unwrap();
	File::create( dir.path().join( "nested.plugin" ).join( "inner.plugin" )).unwrap();

	let files = DefaultDirectoryLister.list_files( dir.path(), "*.plugin" ).unwrap();

	assert_eq!( files, vec![ dir.path().join( "alpha.plugin" ), dir.path().join( "zeta.plugin" )]);

}

#[test]
fn directory_listing_test_invalid_pattern() {

	let dir = tempfile::tempdir().unwrap();
	let result = DefaultDirectoryLister.list_files( dir.path(), "[unclosed" );
	assert!( matches!( result, Err( ListingError::Pattern( _ ))));

}

#[test]
fn directory_listing_test_missing_directory() {

	let dir = tempfile::tempdir().unwrap();
	let missing = dir.path().join( "absent" );
	match DefaultDirectoryLister.list_files( &missing, "*.plugin" ) {
		Err( ListingError::Io { path, .. }) => assert_eq!( path, missing ),
		other => panic!( "unexpected result: {:?}", other ),
	}

}

struct FixedRuntime( bool );

impl RuntimeEnvironment for FixedRuntime {
	fn is_alternate_runtime( &self ) -> bool { self.0 }
}

#[test]
fn plugin_directory_test_default_pattern_follows_runtime() {

	let directory = PluginDirectory::new( "plugins" );
	assert_eq!( directory.pattern_for( &FixedRuntime( false )), DEFAULT_PATTERN );
	assert_eq!( directory.pattern_for( &FixedRuntime( true )), ALTERNATE_RUNTIME_PATTERN );

}

#[test]
fn plugin_directory_test_configured_pattern_wins() {

	let directory = PluginDirectory::new( "plugins" ).with_pattern( "*.so" );
	assert_eq!( directory.pattern_for( &FixedRuntime( false )), "*.so" );
	assert_eq!( directory.pattern_for( &FixedRuntime( true )), "*.so" );
	assert_eq!( directory.pattern(), "*.so" );

}

#[test]
fn plugin_directory_test_host_runtime_is_fixed_at_compile_time() {

	let expected = match cfg!( target_family = "wasm" ) || cfg!( miri ) {
		true => ALTERNATE_RUNTIME_PATTERN,
		false => DEFAULT_PATTERN,
	};
	assert_eq!( HostRuntime.is_alternate_runtime(), expected == ALTERNATE_RUNTIME_PATTERN );
	assert_eq!( PluginDirectory::new( "plugins" ).pattern(), expected );

}
