//! Attribute-tagged plugins.
//!
//! A plugin is a type that carries a marker annotation, has a zero-argument
//! constructor and implements [`LoaderPlugin`] for the target it configures.
//! [`PluginActionLoader`] turns each such descriptor into exactly one [`Action`]
//! that, when applied, constructs the plugin and lets it configure the target.
//! Construction is deferred until the action runs, so constructor side effects
//! only happen for actions that are actually applied.

use std::marker::PhantomData ;
use std::any::Any ;

use crate::action::{ Action, ActionError };
use crate::action_loader::{ ActionLoader, Eligibility, Ineligibility };
use crate::descriptor::{ BoxError, TypeDescriptor };



/// The configuration capability a plugin implements for its target type.
///
/// Register it on a descriptor with
/// [`TypeDescriptorBuilder::plugin_for`]( crate::TypeDescriptorBuilder::plugin_for ).
pub trait LoaderPlugin<T>: Send {
	/// Applies this plugin's configuration to `target`.
	///
	/// # Errors
	/// Any error aborts the [`load_into`]( crate::LoadInto::load_into ) call applying it.
	fn configure( &self, target: &mut T ) -> Result<(), BoxError> ;
}

/// The default marker annotation recognised by [`PluginActionLoader`].
#[derive( Debug, Clone, Copy, Default, PartialEq, Eq )]
pub struct Plugin ;

/// Loads plugins marked with `M` that configure targets of type `T`.
///
/// A descriptor is eligible when, in order of checking:
/// - its metadata can be inspected,
/// - it has a zero-argument constructor,
/// - it carries at least one `M` marker,
/// - it implements [`LoaderPlugin<T>`].
///
/// # Example
///
/// ```
/// use plugin_loaders::{ ActionLoader, BoxError, LoaderPlugin, Plugin, PluginActionLoader, TypeDescriptor };
///
/// #[derive( Default )]
/// struct Greeting ;
///
/// impl LoaderPlugin<Vec<String>> for Greeting {
/// 	fn configure( &self, lines: &mut Vec<String> ) -> Result<(), BoxError> {
/// 		lines.push( "hello".to_string() );
/// 		Ok(())
/// 	}
/// }
///
/// let descriptor = TypeDescriptor::builder::<Greeting>( "Greeting" )
/// 	.marker( Plugin )
/// 	.default_constructor()
/// 	.plugin_for::<Vec<String>>()
/// 	.build();
///
/// let loader = PluginActionLoader::<Vec<String>>::new();
/// let actions = loader.load( &descriptor ).unwrap();
/// assert_eq!( actions.len(), 1 );
///
/// let mut lines = Vec::new();
/// actions[0].invoke( &mut lines ).unwrap();
/// assert_eq!( lines, [ "hello" ]);
/// ```
pub struct PluginActionLoader<T, M = Plugin> {
	_types: PhantomData<fn() -> ( T, M )>,
}

impl<T, M> PluginActionLoader<T, M> {
	pub const fn new() -> Self { Self { _types: PhantomData }}
}

impl<T, M> Default for PluginActionLoader<T, M> {
	fn default() -> Self { Self::new() }
}

impl<T, M> std::fmt::Debug for PluginActionLoader<T, M> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "PluginActionLoader" )
			.field( "target", &std::any::type_name::<T>() )
			.field( "marker", &std::any::type_name::<M>() )
			.finish()
	}
}

impl<T: 'static, M: Any> ActionLoader<T> for PluginActionLoader<T, M> {

	fn probe( &self, descriptor: &TypeDescriptor ) -> Eligibility {
		let metadata = match descriptor.metadata() {
			Ok( metadata ) => metadata,
			Err( err ) => return Ineligibility::Inspection( err ).into(),
		};
		if !metadata.has_default_constructor() { return Ineligibility::NoDefaultConstructor.into() }
		if !metadata.has_marker::<M>() { return Ineligibility::MissingMarker.into() }
		if !metadata.is_assignable_to::<Box<dyn LoaderPlugin<T>>>() {
			return Ineligibility::MissingCapability( std::any::type_name::<dyn LoaderPlugin<T>>() ).into()
		}
		Eligibility::Eligible
	}

	fn load( &self, descriptor: &TypeDescriptor ) -> Result<Vec<Action<T>>, ActionError> {

		if !self.can_load( descriptor ) { return Ok( Vec::with_capacity( 0 )) }

		let descriptor = descriptor.clone();
		Ok( vec![ Action::new( move | target: &mut T | {
			tracing::trace!( plugin = descriptor.name(), "Configuring target" );
			let plugin = descriptor.construct_as::<Box<dyn LoaderPlugin<T>>>()?;
			plugin.configure( target ).map_err(| reason | ActionError::Configuration {
				type_name: descriptor.name().to_string(),
				reason,
			})
		})])

	}

}
