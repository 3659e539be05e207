//! Host runtime detection.



/// Answers questions about the runtime the process is hosted on.
pub trait RuntimeEnvironment {
	/// Whether the process runs on an alternate runtime rather than natively on the host.
	fn is_alternate_runtime( &self ) -> bool ;
}

/// The runtime of the current process.
///
/// WebAssembly hosts and the Miri interpreter count as alternate runtimes. Both are
/// known when the crate is compiled.
#[derive( Debug, Clone, Copy, Default )]
pub struct HostRuntime ;

const IS_ALTERNATE_RUNTIME: bool = cfg!( target_family = "wasm" ) || cfg!( miri );

impl RuntimeEnvironment for HostRuntime {
	fn is_alternate_runtime( &self ) -> bool { IS_ALTERNATE_RUNTIME }
}
