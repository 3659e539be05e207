use pretty_assertions::assert_eq ;
use plugin_loaders::{ ActionLoader, Eligibility, Ineligibility, InspectError, PluginActionLoader, TypeDescriptor };

use crate::fixtures::{ self, PluginA, PluginB, Settings };

#[test]
fn plugin_loader_test_marked_with_constructor_is_eligible() {

	let loader = PluginActionLoader::<Settings>::new();
	let descriptor = fixtures::plugin::<PluginA>( "PluginA" );

	assert!( loader.can_load( &descriptor ));
	assert_eq!( loader.load( &descriptor ).unwrap().len(), 1 );

}

#[test]
fn plugin_loader_test_missing_constructor_is_ineligible() {

	let loader = PluginActionLoader::<Settings>::new();
	let descriptor = fixtures::plugin_without_constructor::<PluginB>( "PluginB" );

	assert_eq!( loader.probe( &descriptor ), Eligibility::Ineligible( Ineligibility::NoDefaultConstructor ));
	assert!( loader.load( &descriptor ).unwrap().is_empty() );

}

#[test]
fn plugin_loader_test_missing_marker_is_ineligible() {

	let loader = PluginActionLoader::<Settings>::new();

	assert_eq!( loader.probe( &fixtures::plain_class() ), Eligibility::Ineligible( Ineligibility::MissingMarker ));
	assert!( loader.load( &fixtures::plain_class() ).unwrap().is_empty() );

}

#[test]
fn plugin_loader_test_custom_marker() {

	struct Extension ;

	let loader = PluginActionLoader::<Settings, Extension>::new();
	let default_marked = fixtures::plugin::<PluginA>( "PluginA" );
	let custom_marked = TypeDescriptor::builder::<PluginA>( "PluginA" )
		.marker( Extension )
		.default_constructor()
		.plugin_for::<Settings>()
		.build();

	assert!( !loader.can_load( &default_marked ));
	assert!( loader.can_load( &custom_marked ));

}

#[test]
fn plugin_loader_test_faulted_descriptor_is_ineligible() {

	let loader = PluginActionLoader::<Settings>::new();
	let error = InspectError::ModuleNotFound { type_name: "Broken".to_string(), module: "missing".to_string() };
	let descriptor = TypeDescriptor::faulted( "Broken", error.clone() );

	let eligibility = loader.probe( &descriptor );
	assert_eq!( eligibility, Eligibility::Ineligible( Ineligibility::Inspection( error )));
	assert!( !eligibility.is_eligible() );
	assert!( loader.load( &descriptor ).unwrap().is_empty() );

}

#[test]
fn plugin_loader_test_failing_initialiser_is_ineligible() {

	let loader = PluginActionLoader::<Settings>::new();
	let descriptor = TypeDescriptor::builder::<PluginA>( "PluginA" )
		.marker( plugin_loaders::Plugin )
		.default_constructor()
		.plugin_for::<Settings>()
		.initialiser(|| Err( "static state unavailable" ))
		.build();

	match loader.probe( &descriptor ) {
		Eligibility::Ineligible( Ineligibility::Inspection( InspectError::TypeInitialisation { type_name, reason })) => {
			assert_eq!( type_name, "PluginA" );
			assert_eq!( reason, "static state unavailable" );
		},
		other => panic!( "unexpected eligibility: {:?}", other ),
	}

}
