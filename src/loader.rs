//! Accumulating and applying actions.
//!
//! A [`Loader`] collects the actions that a set of [`ActionLoader`]s produce for a
//! stream of inputs and later applies them, in discovery order, to a target. It
//! only ever grows by appending.

use std::borrow::Borrow ;
use thiserror::Error ;

use crate::action::{ Action, ActionError };
use crate::action_loader::{ ActionLoader, Ineligibility };
use crate::descriptor::TypeDescriptor ;
use crate::directory::ListingError ;
use crate::source::TypeDescriptorSource ;
use crate::utils::{ PartialResult, Merge };



/// Fatal failure of a discovery pass.
#[derive( Error, Debug )]
pub enum LoadError {
	/// An eligible candidate failed while its actions were produced.
	#[error( "Action Error: {0}" )] Action( #[from] ActionError ),
	/// The plugin directory could not be listed.
	#[error( "Listing Error: {0}" )] Listing( #[from] ListingError ),
}

/// Applies accumulated actions to a target.
pub trait LoadInto<T> {

	/// Invokes every action, in order, against `target`.
	///
	/// # Errors
	/// Stops at the first failing action and returns its error. Actions applied
	/// before the failure are not rolled back.
	fn load_into( &self, target: &mut T ) -> Result<(), ActionError> ;

	/// Constructs a default target and applies every action to it.
	///
	/// # Errors
	/// Same as [`load_into`]( Self::load_into ).
	fn build( &self ) -> Result<T, ActionError>
	where
		T: Default,
	{
		let mut target = T::default();
		self.load_into( &mut target )?;
		Ok( target )
	}

}

/// Builds a new, fully configured target from `loader`.
///
/// # Errors
/// Returns the error of the first action that fails.
pub fn build<T: Default>( loader: &impl LoadInto<T> ) -> Result<T, ActionError> {
	loader.build()
}

/// An ordered, append-only sequence of actions for targets of type `T`.
///
/// # Example
///
/// ```
/// use plugin_loaders::{ build, BoxError, Loader, LoaderPlugin, Plugin, PluginActionLoader, TypeDescriptor };
///
/// #[derive( Default, Debug, PartialEq )]
/// struct Settings { verbose: bool }
///
/// #[derive( Default )]
/// struct Verbose ;
/// impl LoaderPlugin<Settings> for Verbose {
/// 	fn configure( &self, settings: &mut Settings ) -> Result<(), BoxError> {
/// 		settings.verbose = true ;
/// 		Ok(())
/// 	}
/// }
///
/// let descriptors = vec![
/// 	TypeDescriptor::builder::<Verbose>( "Verbose" )
/// 		.marker( Plugin )
/// 		.default_constructor()
/// 		.plugin_for::<Settings>()
/// 		.build(),
/// ];
///
/// let plugins = PluginActionLoader::<Settings>::new();
/// let mut loader = Loader::<Settings>::new();
/// let ( added, warnings ) = loader.load_source( &descriptors, &[ &plugins ]).unwrap();
/// assert_eq!( added, 1 );
/// assert!( warnings.is_empty() );
///
/// assert_eq!( build( &loader ).unwrap(), Settings { verbose: true });
/// ```
pub struct Loader<T> {
	actions: Vec<Action<T>>,
}

impl<T> Loader<T> {

	pub fn new() -> Self { Self { actions: Vec::new() }}

	/// The accumulated actions, in application order.
	#[inline] pub fn actions( &self ) -> &[Action<T>] { &self.actions }

	#[inline] pub fn len( &self ) -> usize { self.actions.len() }

	#[inline] pub fn is_empty( &self ) -> bool { self.actions.is_empty() }

	/// Appends a single action.
	pub fn push( &mut self, action: Action<T> ) -> &mut Self {
		self.actions.push( action );
		self
	}

	/// Consumes the loader, returning its actions.
	pub fn into_actions( self ) -> Vec<Action<T>> { self.actions }

	/// Runs every input through every loader and appends the resulting actions.
	///
	/// Actions are appended in input order, then loader order. Ineligible inputs
	/// are skipped.
	///
	/// # Partial Success
	/// Inputs that could not be inspected ( [`Ineligibility::is_failure`] ) are
	/// skipped and returned as warnings alongside the number of appended actions.
	///
	/// # Errors
	/// If an eligible input fails to produce its actions, the pass is aborted and
	/// nothing is appended. The warnings collected so far are returned with the error.
	pub fn discover<I, C>(
		&mut self,
		inputs: impl IntoIterator<Item = C>,
		loaders: &[&dyn ActionLoader<T, I>],
	) -> PartialResult<usize, LoadError, Ineligibility>
	where
		I: ?Sized,
		C: Borrow<I>,
	{
		let ( staged, warnings ) = collect_actions( inputs, loaders ).map_err(|( err, warnings )| ( LoadError::Action( err ), warnings ))?;
		let added = staged.len();
		self.actions.extend( staged );
		Ok(( added, warnings ))
	}

	/// Runs every descriptor of `source` through every loader.
	///
	/// See [`discover`]( Self::discover ).
	///
	/// # Errors
	/// Same as [`discover`]( Self::discover ).
	pub fn load_source<S>(
		&mut self,
		source: &S,
		loaders: &[&dyn ActionLoader<T>],
	) -> PartialResult<usize, LoadError, Ineligibility>
	where
		S: TypeDescriptorSource + ?Sized,
	{
		self.discover::<TypeDescriptor, _>( source.enumerate(), loaders )
	}

}

impl<T> LoadInto<T> for Loader<T> {
	fn load_into( &self, target: &mut T ) -> Result<(), ActionError> {
		self.actions.iter().enumerate().try_for_each(|( index, action )| {
			tracing::trace!( index, "Applying action" );
			action.invoke( target )
		})
	}
}

impl<T> Default for Loader<T> {
	fn default() -> Self { Self::new() }
}

impl<T> Clone for Loader<T> {
	fn clone( &self ) -> Self { Self { actions: self.actions.clone() }}
}

impl<T> std::fmt::Debug for Loader<T> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "Loader" )
			.field( "target", &std::any::type_name::<T>() )
			.field( "actions", &self.actions.len() )
			.finish()
	}
}

impl<T> Extend<Action<T>> for Loader<T> {
	fn extend<A: IntoIterator<Item = Action<T>>>( &mut self, actions: A ) {
		self.actions.extend( actions );
	}
}

impl<T> FromIterator<Action<T>> for Loader<T> {
	fn from_iter<A: IntoIterator<Item = Action<T>>>( actions: A ) -> Self {
		Self { actions: actions.into_iter().collect() }
	}
}

/// Collects the actions of every eligible input without committing them anywhere.
pub(crate) fn collect_actions<T, I, C>(
	inputs: impl IntoIterator<Item = C>,
	loaders: &[&dyn ActionLoader<T, I>],
) -> PartialResult<Vec<Action<T>>, ActionError, Ineligibility>
where
	I: ?Sized,
	C: Borrow<I>,
{
	let mut staged = Vec::new();
	let mut warnings = Vec::with_capacity( 0 );

	for input in inputs {
		let input: &I = input.borrow();
		for loader in loaders {
			match loader.load_partial( input ) {
				Ok(( actions, found )) => {
					if !actions.is_empty() { tracing::trace!( count = actions.len(), "Collected actions" ); }
					staged.extend( actions );
					warnings = warnings.merge_all( found );
				},
				Err(( err, found )) => return Err(( err, warnings.merge_all( found ))),
			}
		}
	}

	Ok(( staged, warnings ))
}
