//! Type descriptors: the opaque handles discovery runs over.
//!
//! A [`TypeDescriptor`] stands in for a candidate type. Rather than introspecting
//! types at runtime, every candidate describes itself when it is registered: which
//! marker annotations it carries, whether it has a zero-argument constructor, whether
//! it is abstract, and which target types it can be converted into (its
//! **capabilities**). Action loaders only ever read this metadata.
//!
//! Reading the metadata goes through a single fallible probe,
//! [`TypeDescriptor::metadata`]. A descriptor whose initialiser failed, or whose
//! backing module was missing a dependency, answers every probe with an
//! [`InspectError`] instead of panicking, so one broken candidate never aborts a scan.

use std::any::{ Any, TypeId };
use std::borrow::Cow ;
use std::collections::HashMap ;
use std::marker::PhantomData ;
use std::sync::Arc ;
use thiserror::Error ;

use crate::plugin_loader::LoaderPlugin ;



/// A freshly constructed, not yet converted instance of a described type.
pub type Instance = Box<dyn Any + Send>;

/// Boxed error returned by user supplied constructors, initialisers and plugins.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Constructor = Arc<dyn Fn() -> Result<Instance, BoxError> + Send + Sync>;
type Conversion<E> = Box<dyn Fn( Instance ) -> Option<E> + Send + Sync>;
type Initialiser = Box<dyn FnOnce() -> Result<(), BoxError>>;

/// Failures raised while inspecting a descriptor's metadata.
///
/// Both are expected during discovery over an open set of candidates and are
/// converted into ineligibility by every action loader.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
pub enum InspectError {
	/// The type's initialiser failed, so none of its metadata is available.
	#[error( "Type initialisation failed for {type_name}: {reason}" )]
	TypeInitialisation { type_name: String, reason: String },
	/// A module the type depends on could not be found.
	#[error( "Module '{module}' required by {type_name} was not found" )]
	ModuleNotFound { type_name: String, module: String },
}

/// Failures raised while constructing an instance from a descriptor.
#[derive( Error, Debug )]
pub enum ConstructionError {
	/// The descriptor's metadata could not be read.
	#[error( "Inspection Error: {0}" )] Inspection( #[from] InspectError ),
	/// No zero-argument constructor was registered.
	#[error( "{type_name} has no zero-argument constructor" )]
	NoDefaultConstructor { type_name: String },
	/// No conversion into the requested type was registered.
	#[error( "{type_name} is not assignable to {target}" )]
	NotAssignable { type_name: String, target: &'static str },
	/// The registered constructor returned an error.
	#[error( "Constructor of {type_name} failed: {reason}" )]
	ConstructorFailed { type_name: String, reason: BoxError },
}

/// The shape of a described type.
#[derive( Debug, Clone, Copy, Default, PartialEq, Eq, Hash )]
pub enum TypeKind {
	/// A reference type that may be shared once constructed.
	#[default] Class,
	/// A plain value type.
	Value,
	/// A contract with no instances of its own. Always abstract.
	Interface,
}

/// Metadata of a successfully initialised descriptor.
pub struct TypeMetadata {
	type_id: TypeId,
	type_name: &'static str,
	kind: TypeKind,
	is_abstract: bool,
	markers: Vec<Box<dyn Any + Send + Sync>>,
	constructor: Option<Constructor>,
	/// `Map<TypeId of target, Conversion<target>>`
	capabilities: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
	capability_names: Vec<&'static str>,
}

impl TypeMetadata {

	/// The [`TypeId`] of the described Rust type.
	#[inline] pub fn type_id( &self ) -> TypeId { self.type_id }

	/// The compiler's name for the described Rust type.
	#[inline] pub fn type_name( &self ) -> &'static str { self.type_name }

	#[inline] pub fn kind( &self ) -> TypeKind { self.kind }

	#[inline] pub fn is_class( &self ) -> bool { self.kind == TypeKind::Class }

	#[inline] pub fn is_abstract( &self ) -> bool { self.is_abstract || self.kind == TypeKind::Interface }

	#[inline] pub fn has_default_constructor( &self ) -> bool { self.constructor.is_some() }

	/// Every marker annotation of type `M` attached to the descriptor.
	pub fn markers<M: Any>( &self ) -> impl Iterator<Item = &M> {
		self.markers.iter().filter_map(| marker | marker.downcast_ref::<M>())
	}

	/// Whether at least one marker annotation of type `M` is attached.
	pub fn has_marker<M: Any>( &self ) -> bool { self.markers::<M>().next().is_some() }

	/// Whether instances can be converted into `E`.
	pub fn is_assignable_to<E: 'static>( &self ) -> bool { self.conversion::<E>().is_some() }

	fn conversion<E: 'static>( &self ) -> Option<&Conversion<E>> {
		self.capabilities.get( &TypeId::of::<E>() )?.downcast_ref::<Conversion<E>>()
	}

}

impl std::fmt::Debug for TypeMetadata {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "TypeMetadata" )
			.field( "type_name", &self.type_name )
			.field( "kind", &self.kind )
			.field( "is_abstract", &self.is_abstract )
			.field( "markers", &self.markers.len() )
			.field( "constructor", &self.constructor.as_ref().map(| _ | "<constructor>" ))
			.field( "capabilities", &self.capability_names )
			.finish()
	}
}

/// An opaque, cheaply cloneable handle describing one candidate type.
///
/// Two descriptors are equal when they describe the same Rust type. Faulted
/// descriptors compare by name and fault.
///
/// # Example
///
/// ```
/// use plugin_loaders::{ TypeDescriptor, TypeKind };
///
/// #[derive( Default )]
/// struct Greeter ;
/// struct Annotated ;
///
/// let descriptor = TypeDescriptor::builder::<Greeter>( "Greeter" )
/// 	.marker( Annotated )
/// 	.default_constructor()
/// 	.build();
///
/// let metadata = descriptor.metadata().unwrap();
/// assert!( metadata.has_marker::<Annotated>() );
/// assert!( metadata.has_default_constructor() );
/// assert_eq!( metadata.kind(), TypeKind::Class );
/// ```
#[derive( Clone )]
pub struct TypeDescriptor {
	name: Cow<'static, str>,
	requires: Vec<Cow<'static, str>>,
	metadata: Result<Arc<TypeMetadata>, InspectError>,
}

impl TypeDescriptor {

	/// Starts describing `T` under the given name.
	///
	/// Every descriptor is assignable to its own type.
	pub fn builder<T: Any + Send>( name: impl Into<Cow<'static, str>> ) -> TypeDescriptorBuilder<T> {
		TypeDescriptorBuilder {
			name: name.into(),
			kind: TypeKind::default(),
			is_abstract: false,
			markers: Vec::with_capacity( 0 ),
			constructor: None,
			capabilities: HashMap::new(),
			capability_names: Vec::new(),
			requires: Vec::with_capacity( 0 ),
			initialiser: None,
			_type: PhantomData,
		}.implements::<T>( std::convert::identity )
	}

	/// Starts describing `T` under the compiler's name for it.
	pub fn of<T: Any + Send>() -> TypeDescriptorBuilder<T> {
		Self::builder( std::any::type_name::<T>() )
	}

	/// A descriptor whose metadata cannot be inspected.
	pub fn faulted( name: impl Into<Cow<'static, str>>, error: InspectError ) -> Self {
		Self { name: name.into(), requires: Vec::with_capacity( 0 ), metadata: Err( error ) }
	}

	#[inline] pub fn name( &self ) -> &str { &self.name }

	/// Names of the modules this type depends on.
	pub fn requires( &self ) -> impl Iterator<Item = &str> { self.requires.iter().map( AsRef::as_ref ) }

	/// Reads the descriptor's metadata.
	///
	/// # Errors
	/// Returns the [`InspectError`] recorded when the descriptor was built or resolved.
	pub fn metadata( &self ) -> Result<&TypeMetadata, InspectError> {
		self.metadata.as_deref().map_err( Clone::clone )
	}

	/// Whether the descriptor's metadata can be inspected.
	#[inline] pub fn is_faulted( &self ) -> bool { self.metadata.is_err() }

	/// Constructs a new instance through the zero-argument constructor and converts it into `E`.
	///
	/// # Errors
	/// Fails if the metadata cannot be inspected, no constructor or no conversion into `E`
	/// was registered, or the constructor itself fails.
	pub fn construct_as<E: 'static>( &self ) -> Result<E, ConstructionError> {
		let metadata = self.metadata()?;
		let convert = metadata.conversion::<E>().ok_or_else(|| self.not_assignable::<E>())?;
		let construct = metadata.constructor.as_ref()
			.ok_or_else(|| ConstructionError::NoDefaultConstructor { type_name: self.name.to_string() })?;
		let instance = construct()
			.map_err(| reason | ConstructionError::ConstructorFailed { type_name: self.name.to_string(), reason })?;
		convert( instance ).ok_or_else(|| self.not_assignable::<E>())
	}

	pub(crate) fn into_faulted( self, error: InspectError ) -> Self {
		Self { metadata: Err( error ), ..self }
	}

	fn not_assignable<E: 'static>( &self ) -> ConstructionError {
		ConstructionError::NotAssignable { type_name: self.name.to_string(), target: std::any::type_name::<E>() }
	}

}

impl PartialEq for TypeDescriptor {
	fn eq( &self, other: &Self ) -> bool {
		match ( &self.metadata, &other.metadata ) {
			( Ok( this ), Ok( that )) => this.type_id == that.type_id,
			( Err( this ), Err( that )) => self.name == other.name && this == that,
			_ => false,
		}
	}
}

impl Eq for TypeDescriptor {}

impl std::fmt::Debug for TypeDescriptor {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "TypeDescriptor" )
			.field( "name", &self.name )
			.field( "requires", &self.requires )
			.field( "metadata", &self.metadata )
			.finish()
	}
}

/// Builder for a [`TypeDescriptor`] describing `T`.
#[must_use = "call .build() to produce a TypeDescriptor"]
pub struct TypeDescriptorBuilder<T> {
	name: Cow<'static, str>,
	kind: TypeKind,
	is_abstract: bool,
	markers: Vec<Box<dyn Any + Send + Sync>>,
	constructor: Option<Constructor>,
	capabilities: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
	capability_names: Vec<&'static str>,
	requires: Vec<Cow<'static, str>>,
	initialiser: Option<Initialiser>,
	_type: PhantomData<fn() -> T>,
}

impl<T: Any + Send> TypeDescriptorBuilder<T> {

	/// Sets the shape of the type. Defaults to [`TypeKind::Class`].
	pub fn kind( mut self, kind: TypeKind ) -> Self {
		self.kind = kind ;
		self
	}

	/// Marks the type as abstract: it may be described but never instantiated by a loader.
	pub fn as_abstract( mut self ) -> Self {
		self.is_abstract = true ;
		self
	}

	/// Attaches a marker annotation. Markers are plain values, queried by their type.
	pub fn marker<M: Any + Send + Sync>( mut self, marker: M ) -> Self {
		self.markers.push( Box::new( marker ));
		self
	}

	/// Registers an infallible zero-argument constructor.
	pub fn constructor( mut self, constructor: impl Fn() -> T + Send + Sync + 'static ) -> Self {
		let constructor: Constructor = Arc::new( move || Ok::<Instance, BoxError>( Box::new( constructor() )));
		self.constructor = Some( constructor );
		self
	}

	/// Registers a zero-argument constructor that may fail.
	pub fn fallible_constructor<E: Into<BoxError>>(
		mut self,
		constructor: impl Fn() -> Result<T, E> + Send + Sync + 'static,
	) -> Self {
		let constructor: Constructor = Arc::new( move || constructor()
			.map(| instance | Box::new( instance ) as Instance )
			.map_err( Into::into )
		);
		self.constructor = Some( constructor );
		self
	}

	/// Registers [`Default::default`] as the zero-argument constructor.
	pub fn default_constructor( self ) -> Self where T: Default {
		self.constructor( T::default )
	}

	/// Declares that instances can be converted into `E`, using `upcast` to do so.
	///
	/// Registering `E` twice keeps the latest conversion.
	pub fn implements<E: 'static>( mut self, upcast: impl Fn( T ) -> E + Send + Sync + 'static ) -> Self {
		let conversion: Conversion<E> = Box::new( move | instance: Instance | instance
			.downcast::<T>()
			.ok()
			.map(| concrete | upcast( *concrete ))
		);
		if self.capabilities.insert( TypeId::of::<E>(), Box::new( conversion )).is_none() {
			self.capability_names.push( std::any::type_name::<E>() );
		}
		self
	}

	/// Declares that the type configures targets of type `Target`.
	pub fn plugin_for<Target: 'static>( self ) -> Self where T: LoaderPlugin<Target> + 'static {
		self.implements::<Box<dyn LoaderPlugin<Target>>>(| plugin | Box::new( plugin ) as Box<dyn LoaderPlugin<Target>> )
	}

	/// Declares a dependency on another module.
	pub fn requires( mut self, module: impl Into<Cow<'static, str>> ) -> Self {
		self.requires.push( module.into() );
		self
	}

	/// Registers an initialiser that runs once, when the descriptor is built.
	///
	/// A failing initialiser produces a descriptor faulted with
	/// [`InspectError::TypeInitialisation`].
	pub fn initialiser<E: Into<BoxError>>( mut self, initialiser: impl FnOnce() -> Result<(), E> + 'static ) -> Self {
		self.initialiser = Some( Box::new( move || initialiser().map_err( Into::into )));
		self
	}

	pub fn build( self ) -> TypeDescriptor {

		if let Some( initialiser ) = self.initialiser {
			if let Err( reason ) = initialiser() {
				let error = InspectError::TypeInitialisation { type_name: self.name.to_string(), reason: reason.to_string() };
				return TypeDescriptor { name: self.name, requires: self.requires, metadata: Err( error ) };
			}
		}

		let metadata = TypeMetadata {
			type_id: TypeId::of::<T>(),
			type_name: std::any::type_name::<T>(),
			kind: self.kind,
			is_abstract: self.is_abstract,
			markers: self.markers,
			constructor: self.constructor,
			capabilities: self.capabilities,
			capability_names: self.capability_names,
		};

		TypeDescriptor { name: self.name, requires: self.requires, metadata: Ok( Arc::new( metadata )) }

	}

}
