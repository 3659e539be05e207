//! Deferred units of work.
//!
//! An [`Action`] mutates the one target it is invoked on and nothing else. Actions
//! are produced by [`ActionLoader`]( crate::ActionLoader )s at discovery time and
//! applied, in order, by a [`Loader`]( crate::Loader ).

use std::sync::Arc ;
use thiserror::Error ;

use crate::descriptor::{ BoxError, ConstructionError };



/// Errors raised while invoking an action.
///
/// These only occur after a candidate already passed its eligibility check, so
/// they are never recovered locally: they abort the whole
/// [`load_into`]( crate::LoadInto::load_into ) or [`build`]( crate::LoadInto::build ) call.
#[derive( Error, Debug )]
pub enum ActionError {
	/// Constructing the plugin or component failed.
	#[error( "Construction Error: {0}" )] Construction( #[from] ConstructionError ),
	/// A plugin failed while configuring its target.
	#[error( "Plugin {type_name} failed to configure its target: {reason}" )]
	Configuration { type_name: String, reason: BoxError },
}

/// A deferred unit of work that mutates a target when invoked.
///
/// Cloning an action is cheap and yields a handle to the same underlying closure,
/// so an action can be held by several sequences at once.
pub struct Action<T>( Arc<dyn Fn( &mut T ) -> Result<(), ActionError> + Send + Sync> );

impl<T> Action<T> {

	/// Wraps a closure as an action.
	pub fn new( action: impl Fn( &mut T ) -> Result<(), ActionError> + Send + Sync + 'static ) -> Self {
		Self( Arc::new( action ))
	}

	/// Applies the action to `target`.
	///
	/// # Errors
	/// Returns whatever the underlying closure failed with.
	#[inline]
	pub fn invoke( &self, target: &mut T ) -> Result<(), ActionError> {
		( self.0 )( target )
	}

}

impl<T> Clone for Action<T> {
	fn clone( &self ) -> Self { Self( Arc::clone( &self.0 )) }
}

impl<T> std::fmt::Debug for Action<T> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_tuple( "Action" ).field( &"<closure>" ).finish()
	}
}
