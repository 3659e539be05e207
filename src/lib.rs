//! Plugin discovery and composition.
//!
//! `plugin_loaders` turns a pool of candidate types into a configured object in two
//! separate phases. **Discovery** runs every candidate through a set of action
//! loaders: each loader decides whether it can handle the candidate and, if so,
//! turns it into deferred [`Action`]s. **Application** later invokes those actions,
//! in discovery order, against a freshly constructed target.
//!
//! # Core Concepts
//!
//! - [`TypeDescriptor`]: An opaque handle describing one candidate type: its marker
//! 	annotations, zero-argument constructor, abstractness and the target types it can
//! 	be converted into. Types describe themselves when they are registered, either
//! 	programmatically or at program initialisation through [`register_type!`].
//!
//! - [`ActionLoader`]: The eligibility policy. [`probe`]( ActionLoader::probe ) never
//! 	fails: descriptors that cannot be inspected are reported as an [`Ineligibility`]
//! 	so that one broken candidate never aborts a scan.
//! 	- [`PluginActionLoader`] accepts marked types with a zero-argument constructor that
//! 		implement [`LoaderPlugin`] and produces one action per type. The plugin is
//! 		constructed lazily, when its action runs.
//! 	- [`CollectionActionLoader`] accepts concrete classes assignable to an element type,
//! 		constructs one instance eagerly and produces one action appending it to a collection.
//! 	- [`ModuleActionLoader`] lifts type-level loaders to module files on disk.
//!
//! - [`Loader`]: The append-only, ordered sequence of actions collected for one target
//! 	type. Apply it with [`LoadInto::load_into`] or construct and configure a new target
//! 	with [`LoadInto::build`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc ;
//! use plugin_loaders::{
//! 	build, BoxError, CollectionActionLoader, Loader, LoaderPlugin, LoadInto,
//! 	Plugin, PluginActionLoader, TypeDescriptor,
//! };
//!
//! // The target being configured.
//! #[derive( Default )]
//! struct Server { port: u16, banner: Option<String> }
//!
//! // A plugin: marked with `Plugin`, default constructible, configures a `Server`.
//! #[derive( Default )]
//! struct DefaultPort ;
//! impl LoaderPlugin<Server> for DefaultPort {
//! 	fn configure( &self, server: &mut Server ) -> Result<(), BoxError> {
//! 		server.port = 8080 ;
//! 		Ok(())
//! 	}
//! }
//!
//! // Not marked, so it is skipped.
//! #[derive( Default )]
//! struct Banner ;
//! impl LoaderPlugin<Server> for Banner {
//! 	fn configure( &self, server: &mut Server ) -> Result<(), BoxError> {
//! 		server.banner = Some( "hello".into() );
//! 		Ok(())
//! 	}
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let descriptors = vec![
//! 	TypeDescriptor::builder::<DefaultPort>( "DefaultPort" )
//! 		.marker( Plugin )
//! 		.default_constructor()
//! 		.plugin_for::<Server>()
//! 		.build(),
//! 	TypeDescriptor::builder::<Banner>( "Banner" )
//! 		.default_constructor()
//! 		.plugin_for::<Server>()
//! 		.build(),
//! ];
//!
//! let plugins = PluginActionLoader::<Server>::new();
//! let mut loader = Loader::<Server>::new();
//! loader.load_source( &descriptors, &[ &plugins ]).map_err(|( err, _ )| err )?;
//! assert_eq!( loader.len(), 1 );
//!
//! let server = build( &loader )?;
//! assert_eq!( server.port, 8080 );
//! assert!( server.banner.is_none() );
//!
//! // The same descriptors can feed a collection of shared instances.
//! trait Named: Send + Sync { fn name( &self ) -> &'static str ; }
//! impl Named for DefaultPort { fn name( &self ) -> &'static str { "default-port" } }
//!
//! let named = vec![
//! 	TypeDescriptor::builder::<DefaultPort>( "DefaultPort" )
//! 		.default_constructor()
//! 		.implements::<Arc<dyn Named>>(| plugin | Arc::new( plugin ) as Arc<dyn Named> )
//! 		.build(),
//! ];
//! let components = CollectionActionLoader::<Arc<dyn Named>>::new();
//! let mut collection_loader = Loader::<Vec<Arc<dyn Named>>>::new();
//! collection_loader.load_source( &named, &[ &components ]).map_err(|( err, _ )| err )?;
//!
//! let mut names = Vec::new();
//! collection_loader.load_into( &mut names )?;
//! assert_eq!( names[0].name(), "default-port" );
//! # Ok(())
//! # }
//! ```
//!
//! # Discovering From Disk
//!
//! Module files are resolved through a [`ModuleLoader`]. The bundled
//! [`CatalogModuleLoader`] treats each file as a handle naming a module of a
//! [`Catalog`], which in turn collects every [`register_type!`] registration. A
//! [`PluginDirectory`] lists the module files of a directory and feeds them to
//! path-level loaders such as [`ModuleActionLoader`].
//!
//! # Error Handling
//!
//! - An ineligible candidate is silently skipped.
//! - A candidate whose metadata cannot be inspected ( [`InspectError`] ) or whose module
//! 	cannot be loaded ( [`ModuleLoadError`] ) is skipped and returned as a warning.
//! - A failure after eligibility was established, such as a constructor error, is fatal
//! 	to the call it happens in: [`ActionError`] for applying actions, [`LoadError`] for
//! 	discovery.

mod action ;
mod action_loader ;
mod catalog ;
mod collection_loader ;
mod descriptor ;
mod directory ;
mod loader ;
mod module ;
mod module_loader ;
mod plugin_directory ;
mod plugin_loader ;
mod runtime ;
mod source ;
mod utils ;

#[doc( hidden )]
pub use inventory ;

pub use action::{ Action, ActionError };
pub use action_loader::{ ActionLoader, Eligibility, Ineligibility };
pub use catalog::{ Catalog, CatalogModuleLoader, Registration };
pub use collection_loader::CollectionActionLoader ;
pub use descriptor::{
	BoxError, ConstructionError, Instance, InspectError,
	TypeDescriptor, TypeDescriptorBuilder, TypeKind, TypeMetadata,
};
pub use directory::{ DefaultDirectoryLister, DirectoryListing, ListingError };
pub use loader::{ build, Loader, LoadError, LoadInto };
pub use module::{ Module, ModuleLoader, ModuleLoadError };
pub use module_loader::ModuleActionLoader ;
pub use plugin_directory::{ PluginDirectory, DEFAULT_PATTERN, ALTERNATE_RUNTIME_PATTERN };
pub use plugin_loader::{ LoaderPlugin, Plugin, PluginActionLoader };
pub use runtime::{ HostRuntime, RuntimeEnvironment };
pub use source::TypeDescriptorSource ;
pub use utils::{ PartialResult, PartialSuccess };
