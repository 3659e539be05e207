//! Collections of concrete subtype instances.
//!
//! [`CollectionActionLoader`] accepts every concrete class assignable to the element
//! type `E`. Unlike plugins, components are constructed eagerly: [`load`]( ActionLoader::load )
//! builds one instance and returns an action appending that very instance to whatever
//! collection it is applied to. Applying the same action to two collections therefore
//! shares one instance between them, so `E` is expected to be a shared handle such as
//! `Arc<dyn Trait>`.

use std::marker::PhantomData ;

use crate::action::{ Action, ActionError };
use crate::action_loader::{ ActionLoader, Eligibility, Ineligibility };
use crate::descriptor::TypeDescriptor ;



/// Loads one instance of every concrete class assignable to `E` into a collection `C`.
///
/// # Example
///
/// ```
/// use std::sync::Arc ;
/// use plugin_loaders::{ ActionLoader, CollectionActionLoader, TypeDescriptor };
///
/// trait Shape: Send + Sync { fn corners( &self ) -> u32 ; }
///
/// #[derive( Default )]
/// struct Square ;
/// impl Shape for Square { fn corners( &self ) -> u32 { 4 } }
///
/// let descriptor = TypeDescriptor::builder::<Square>( "Square" )
/// 	.default_constructor()
/// 	.implements::<Arc<dyn Shape>>(| square | Arc::new( square ) as Arc<dyn Shape> )
/// 	.build();
///
/// let loader = CollectionActionLoader::<Arc<dyn Shape>>::new();
/// let actions = loader.load( &descriptor ).unwrap();
///
/// let mut shapes = Vec::new();
/// actions[0].invoke( &mut shapes ).unwrap();
/// assert_eq!( shapes[0].corners(), 4 );
/// ```
pub struct CollectionActionLoader<E, C = Vec<E>> {
	_types: PhantomData<fn() -> ( E, C )>,
}

impl<E, C> CollectionActionLoader<E, C> {
	pub const fn new() -> Self { Self { _types: PhantomData }}
}

impl<E, C> Default for CollectionActionLoader<E, C> {
	fn default() -> Self { Self::new() }
}

impl<E, C> std::fmt::Debug for CollectionActionLoader<E, C> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "CollectionActionLoader" )
			.field( "element", &std::any::type_name::<E>() )
			.field( "collection", &std::any::type_name::<C>() )
			.finish()
	}
}

impl<E, C> ActionLoader<C> for CollectionActionLoader<E, C>
where
	E: Clone + Send + Sync + 'static,
	C: Extend<E> + 'static,
{

	fn probe( &self, descriptor: &TypeDescriptor ) -> Eligibility {
		let metadata = match descriptor.metadata() {
			Ok( metadata ) => metadata,
			Err( err ) => return Ineligibility::Inspection( err ).into(),
		};
		if !metadata.is_assignable_to::<E>() { return Ineligibility::NotAssignable( std::any::type_name::<E>() ).into() }
		if !metadata.is_class() { return Ineligibility::NotAClass.into() }
		if metadata.is_abstract() { return Ineligibility::Abstract.into() }
		Eligibility::Eligible
	}

	fn load( &self, descriptor: &TypeDescriptor ) -> Result<Vec<Action<C>>, ActionError> {

		// Checked again here since construction happens now rather than at invocation.
		let constructible = descriptor.metadata()
			.is_ok_and(| metadata | metadata.has_default_constructor() && !metadata.is_abstract() );
		if !constructible || !self.can_load( descriptor ) { return Ok( Vec::with_capacity( 0 )) }

		let component = descriptor.construct_as::<E>()?;
		tracing::trace!( component = descriptor.name(), "Constructed collection component" );

		Ok( vec![ Action::new( move | collection: &mut C | {
			collection.extend( std::iter::once( component.clone() ));
			Ok(())
		})])

	}

}
