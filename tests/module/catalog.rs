use std::fs::File ;
use pretty_assertions::assert_eq ;
use plugin_loaders::{ Catalog, CatalogModuleLoader, InspectError, ModuleLoader, ModuleLoadError, TypeDescriptor };

use crate::fixtures::{ self, PluginA, PluginB };

#[test]
fn catalog_test_modules_keep_registration_order() {

	let catalog = Catalog::new()
		.with( "core", fixtures::plugin::<PluginB>( "PluginB" ))
		.with( "core", fixtures::plugin::<PluginA>( "PluginA" ));

	let module = catalog.module( "core" ).unwrap();
	let names = module.descriptors().iter().map( TypeDescriptor::name ).collect::<Vec<_>>();

	assert_eq!( module.name(), "core" );
	assert_eq!( names, [ "PluginB", "PluginA" ]);
	assert!( catalog.module( "extras" ).is_none() );

}

#[test]
fn catalog_test_missing_dependency_faults_descriptor() {

	let dependent = TypeDescriptor::builder::<PluginA>( "PluginA" )
		.default_constructor()
		.requires( "shared" )
		.build();

	let catalog = Catalog::new().with( "main", dependent.clone() );
	let module = catalog.module( "main" ).unwrap();

	assert_eq!(
		module.descriptors()[0].metadata().unwrap_err(),
		InspectError::ModuleNotFound { type_name: "PluginA".to_string(), module: "shared".to_string() },
	);

	// Once the dependency is registered, the same descriptor resolves.
	let catalog = catalog.with( "shared", fixtures::plain_class() );
	let module = catalog.module( "main" ).unwrap();
	assert!( module.descriptors()[0].metadata().is_ok() );
	assert_eq!( catalog.module_names().collect::<Vec<_>>(), [ "main", "shared" ]);

}

#[test]
fn catalog_loader_test_resolves_file_stem() {

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join( "core.plugin" );
	File::create( &path ).unwrap();

	let loader = CatalogModuleLoader::new( Catalog::new().with( "core", fixtures::plugin::<PluginA>( "PluginA" )));
	let module = loader.load( &path ).unwrap();

	assert_eq!( module.name(), "core" );
	assert_eq!( module.path(), Some( path.as_path() ));
	assert_eq!( module.descriptors().len(), 1 );

}

#[test]
fn catalog_loader_test_missing_file_is_not_found() {

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join( "core.plugin" );

	let loader = CatalogModuleLoader::new( Catalog::new().with( "core", fixtures::plain_class() ));
	assert_eq!( loader.load( &path ), Err( ModuleLoadError::NotFound { path }));

}

#[test]
fn catalog_loader_test_unknown_module_fails_to_load() {

	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join( "unknown.plugin" );
	File::create( &path ).unwrap();

	let loader = CatalogModuleLoader::default();
	assert!( matches!( loader.load( &path ), Err( ModuleLoadError::LoadFailed { .. })));

}

#[test]
fn module_loader_test_closures_are_module_loaders() {

	let loader = | path: &std::path::Path | Err::<plugin_loaders::Module, _>( ModuleLoadError::LoadFailed {
		path: path.to_path_buf(),
		reason: "corrupt".to_string(),
	});

	let error = ModuleLoader::load( &loader, std::path::Path::new( "broken.plugin" )).unwrap_err();
	assert_eq!( error.to_string(), "Failed to load module broken.plugin: corrupt" );

}
