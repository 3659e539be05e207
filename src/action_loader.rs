//! The action loader contract.
//!
//! An [`ActionLoader`] answers two questions about a single input: *can I turn
//! this into actions?* ([`probe`]( ActionLoader::probe )) and *which actions?*
//! ([`load`]( ActionLoader::load )). The probe is tolerant and never fails: any
//! problem inspecting the input becomes an [`Ineligibility`]. The load assumes a
//! prior successful probe but still returns nothing for ineligible input.

use thiserror::Error ;

use crate::action::{ Action, ActionError };
use crate::descriptor::{ InspectError, TypeDescriptor };
use crate::module::ModuleLoadError ;
use crate::utils::PartialResult ;



/// The reason an input was rejected by [`ActionLoader::probe`].
///
/// [`Inspection`]( Self::Inspection ) and [`Module`]( Self::Module ) are failures
/// recovered at the probe boundary and are reported back as warnings by the
/// [`Loader`]( crate::Loader ). Every other reason is a plain, silent skip.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum Ineligibility {
	/// The designated marker annotation is not attached.
	#[error( "Missing marker annotation" )] MissingMarker,
	/// No zero-argument constructor was registered.
	#[error( "No zero-argument constructor" )] NoDefaultConstructor,
	/// The type is abstract.
	#[error( "Abstract type" )] Abstract,
	/// The type is not a class.
	#[error( "Not a class" )] NotAClass,
	/// The type is not assignable to the collection's element type.
	#[error( "Not assignable to {0}" )] NotAssignable( &'static str ),
	/// The type does not implement the target's configuration capability.
	#[error( "Missing capability {0}" )] MissingCapability( &'static str ),
	/// The descriptor's metadata could not be inspected.
	#[error( "Inspection Error: {0}" )] Inspection( #[from] InspectError ),
	/// The module backing the input could not be loaded.
	#[error( "Module Load Error: {0}" )] Module( #[from] ModuleLoadError ),
}

impl Ineligibility {
	/// Whether the rejection stems from a recovered failure rather than a plain mismatch.
	pub fn is_failure( &self ) -> bool {
		matches!( self, Self::Inspection( _ ) | Self::Module( _ ))
	}

	/// Logs the skip and keeps the reason as a warning if it is a failure.
	pub(crate) fn into_warnings( self ) -> Vec<Self> {
		if self.is_failure() {
			tracing::warn!( reason = %self, "Skipped candidate that could not be inspected" );
			vec![ self ]
		} else {
			tracing::debug!( reason = %self, "Skipped ineligible candidate" );
			Vec::with_capacity( 0 )
		}
	}
}

/// Outcome of [`ActionLoader::probe`].
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum Eligibility {
	/// The input can be turned into actions.
	Eligible,
	/// The input is skipped for the given reason.
	Ineligible( Ineligibility ),
}

impl Eligibility {
	/// Whether the probe accepted the input.
	#[inline] pub fn is_eligible( &self ) -> bool { matches!( self, Self::Eligible ) }
}

impl From<Ineligibility> for Eligibility {
	fn from( reason: Ineligibility ) -> Self { Self::Ineligible( reason ) }
}

impl From<Result<(), Ineligibility>> for Eligibility {
	fn from( result: Result<(), Ineligibility> ) -> Self {
		match result {
			Ok(()) => Self::Eligible,
			Err( reason ) => Self::Ineligible( reason ),
		}
	}
}

/// A stateless policy turning inputs of type `I` into actions on targets of type `T`.
///
/// Loaders are independent of each other: several may be run over the same input.
/// The order in which their actions are collected is the order they are applied in.
///
/// # Example
///
/// ```
/// use plugin_loaders::{ Action, ActionLoader, ActionError, Eligibility, Ineligibility, TypeDescriptor };
///
/// struct Marker ;
/// struct Counter ;
///
/// /// Counts every marked descriptor it sees.
/// struct CountMarked ;
///
/// impl ActionLoader<usize> for CountMarked {
/// 	fn probe( &self, descriptor: &TypeDescriptor ) -> Eligibility {
/// 		match descriptor.metadata() {
/// 			Ok( metadata ) if metadata.has_marker::<Marker>() => Eligibility::Eligible,
/// 			Ok( _ ) => Ineligibility::MissingMarker.into(),
/// 			Err( err ) => Ineligibility::Inspection( err ).into(),
/// 		}
/// 	}
/// 	fn load( &self, descriptor: &TypeDescriptor ) -> Result<Vec<Action<usize>>, ActionError> {
/// 		if !self.can_load( descriptor ) { return Ok( Vec::new() ) }
/// 		Ok( vec![ Action::new(| count: &mut usize | { *count += 1 ; Ok(()) }) ])
/// 	}
/// }
///
/// let marked = TypeDescriptor::builder::<Counter>( "Counter" ).marker( Marker ).build();
/// let plain = TypeDescriptor::builder::<Counter>( "Plain" ).build();
///
/// assert!( CountMarked.can_load( &marked ));
/// assert!( !CountMarked.can_load( &plain ));
/// assert!( CountMarked.load( &plain ).unwrap().is_empty() );
/// ```
pub trait ActionLoader<T, I: ?Sized = TypeDescriptor> {

	/// Decides whether `input` can be turned into actions.
	///
	/// Must not fail and must not have side effects beyond inspecting the input.
	/// Inspection failures are reported as [`Ineligibility::Inspection`] or
	/// [`Ineligibility::Module`].
	fn probe( &self, input: &I ) -> Eligibility ;

	/// Shorthand for `self.probe( input ).is_eligible()`.
	fn can_load( &self, input: &I ) -> bool { self.probe( input ).is_eligible() }

	/// Produces the actions for `input`.
	///
	/// May assume [`probe`]( Self::probe ) accepted the input, but returns an empty
	/// list rather than failing when nothing is actionable.
	///
	/// # Errors
	/// Only for defects surfacing after eligibility was established, such as a
	/// constructor failing while an instance is built eagerly.
	fn load( &self, input: &I ) -> Result<Vec<Action<T>>, ActionError> ;

	/// Probes `input` and loads it if eligible, as one step of a discovery pass.
	///
	/// This is what the [`Loader`]( crate::Loader ) calls. Ineligibility that stems
	/// from a failure is returned as a warning. Loaders that wrap other loaders
	/// override it to inspect their input once and to pass on the warnings of the
	/// loaders they wrap.
	///
	/// # Errors
	/// Same as [`load`]( Self::load ). Warnings collected before the failure are kept.
	fn load_partial( &self, input: &I ) -> PartialResult<Vec<Action<T>>, ActionError, Ineligibility> {
		match self.probe( input ) {
			Eligibility::Eligible => self.load( input )
				.map(| actions | ( actions, Vec::with_capacity( 0 )))
				.map_err(| err | ( err, Vec::with_capacity( 0 ))),
			Eligibility::Ineligible( reason ) => Ok(( Vec::with_capacity( 0 ), reason.into_warnings() )),
		}
	}

}
