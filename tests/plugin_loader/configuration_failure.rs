use plugin_loaders::{ ActionError, ActionLoader, BoxError, ConstructionError, LoaderPlugin, Plugin, PluginActionLoader, TypeDescriptor };

use crate::fixtures::Settings ;

#[derive( Default )]
struct Rejecting ;

impl LoaderPlugin<Settings> for Rejecting {
	fn configure( &self, _settings: &mut Settings ) -> Result<(), BoxError> {
		Err( "port already taken".into() )
	}
}

#[test]
fn plugin_loader_test_configuration_error_propagates() {

	let descriptor = TypeDescriptor::builder::<Rejecting>( "Rejecting" )
		.marker( Plugin )
		.default_constructor()
		.plugin_for::<Settings>()
		.build();

	let actions = PluginActionLoader::<Settings>::new().load( &descriptor ).unwrap();

	match actions[0].invoke( &mut Settings::default() ) {
		Err( ActionError::Configuration { type_name, reason }) => {
			assert_eq!( type_name, "Rejecting" );
			assert_eq!( reason.to_string(), "port already taken" );
		},
		other => panic!( "unexpected result: {:?}", other ),
	}

}

#[test]
fn plugin_loader_test_constructor_error_propagates() {

	struct Unbuildable ;
	impl LoaderPlugin<Settings> for Unbuildable {
		fn configure( &self, _settings: &mut Settings ) -> Result<(), BoxError> { Ok(()) }
	}

	let descriptor = TypeDescriptor::builder::<Unbuildable>( "Unbuildable" )
		.marker( Plugin )
		.fallible_constructor(|| Err::<Unbuildable, _>( "missing configuration file" ))
		.plugin_for::<Settings>()
		.build();

	let loader = PluginActionLoader::<Settings>::new();
	assert!( loader.can_load( &descriptor ));

	let actions = loader.load( &descriptor ).unwrap();
	assert!( matches!(
		actions[0].invoke( &mut Settings::default() ),
		Err( ActionError::Construction( ConstructionError::ConstructorFailed { .. })),
	));

}
