use std::sync::Arc ;
use pretty_assertions::assert_eq ;
use plugin_loaders::{ ActionLoader, CollectionActionLoader, Eligibility, Ineligibility, InspectError, Loader, TypeDescriptor, TypeKind };

use crate::fixtures::{ self, Base, Circle, PlainClass, Square };

type Shapes = CollectionActionLoader<Arc<dyn Base>> ;

#[test]
fn collection_loader_test_concrete_subtype_is_eligible() {
	assert_eq!( Shapes::new().probe( &fixtures::base::<Circle>( "Circle" )), Eligibility::Eligible );
}

#[test]
fn collection_loader_test_abstract_subtype_is_ineligible() {

	let descriptor = TypeDescriptor::builder::<Circle>( "AbstractShape" )
		.as_abstract()
		.default_constructor()
		.implements::<Arc<dyn Base>>(| value | Arc::new( value ) as Arc<dyn Base> )
		.build();

	assert_eq!( Shapes::new().probe( &descriptor ), Eligibility::Ineligible( Ineligibility::Abstract ));
	assert!( Shapes::new().load( &descriptor ).unwrap().is_empty() );

}

#[test]
fn collection_loader_test_interface_is_ineligible() {

	let descriptor = TypeDescriptor::builder::<Circle>( "Shape" )
		.kind( TypeKind::Interface )
		.implements::<Arc<dyn Base>>(| value | Arc::new( value ) as Arc<dyn Base> )
		.build();

	assert!( !Shapes::new().can_load( &descriptor ));
	assert!( Shapes::new().load( &descriptor ).unwrap().is_empty() );

}

#[test]
fn collection_loader_test_value_type_is_ineligible() {

	let descriptor = TypeDescriptor::builder::<Circle>( "CircleValue" )
		.kind( TypeKind::Value )
		.default_constructor()
		.implements::<Arc<dyn Base>>(| value | Arc::new( value ) as Arc<dyn Base> )
		.build();

	assert_eq!( Shapes::new().probe( &descriptor ), Eligibility::Ineligible( Ineligibility::NotAClass ));

}

#[test]
fn collection_loader_test_unrelated_type_is_ineligible() {

	let descriptor = TypeDescriptor::builder::<PlainClass>( "PlainClass" ).default_constructor().build();

	assert!( matches!( Shapes::new().probe( &descriptor ), Eligibility::Ineligible( Ineligibility::NotAssignable( _ ))));
	assert!( Shapes::new().load( &descriptor ).unwrap().is_empty() );

}

#[test]
fn collection_loader_test_missing_constructor_yields_no_actions() {

	// Assignable concrete classes pass the probe, but nothing can be built without a constructor.
	let descriptor = TypeDescriptor::builder::<Circle>( "Circle" )
		.implements::<Arc<dyn Base>>(| value | Arc::new( value ) as Arc<dyn Base> )
		.build();

	assert!( Shapes::new().can_load( &descriptor ));
	assert!( Shapes::new().load( &descriptor ).unwrap().is_empty() );

}

#[test]
fn collection_loader_test_missing_module_is_ineligible() {

	let error = InspectError::ModuleNotFound { type_name: "Hexagon".to_string(), module: "geometry".to_string() };
	let descriptor = TypeDescriptor::faulted( "Hexagon", error.clone() );

	assert_eq!( Shapes::new().probe( &descriptor ), Eligibility::Ineligible( Ineligibility::Inspection( error )));
	assert!( Shapes::new().load( &descriptor ).unwrap().is_empty() );

}

#[test]
fn collection_loader_test_failing_initialiser_is_ineligible() {

	let descriptor = TypeDescriptor::builder::<Circle>( "Circle" )
		.default_constructor()
		.implements::<Arc<dyn Base>>(| value | Arc::new( value ) as Arc<dyn Base> )
		.initialiser(|| Err( "lookup table unavailable" ))
		.build();

	assert!( matches!(
		Shapes::new().probe( &descriptor ),
		Eligibility::Ineligible( Ineligibility::Inspection( InspectError::TypeInitialisation { .. })),
	));
	assert!( Shapes::new().load( &descriptor ).unwrap().is_empty() );

}

#[test]
fn collection_loader_test_faulted_descriptor_does_not_stop_collection() {

	let error = InspectError::ModuleNotFound { type_name: "Hexagon".to_string(), module: "geometry".to_string() };
	let descriptors = [
		fixtures::base::<Circle>( "Circle" ),
		TypeDescriptor::faulted( "Hexagon", error.clone() ),
		fixtures::base::<Square>( "Square" ),
	];

	let components = Shapes::new();
	let mut loader = Loader::<Vec<Arc<dyn Base>>>::new();
	let ( added, warnings ) = loader.load_source( &descriptors, &[ &components ]).unwrap();

	assert_eq!( added, 2 );
	assert_eq!( warnings, vec![ Ineligibility::Inspection( error )]);
	assert_eq!( fixtures::names( &plugin_loaders::build( &loader ).unwrap() ), [ "Circle", "Square" ]);

}
