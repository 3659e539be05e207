//! Type aliases for operations that support partial success/failure patterns.
//! These represent graceful error handling where some candidates may be rejected
//! while others succeed, allowing a discovery pass to complete rather than abort.

/// Represents a successful operation where some parts failed but didn't prevent overall success.
/// The `Vec<W>` contains the failures that were handled gracefully.
pub type PartialSuccess<T, W> = ( T, Vec<W> );

/// Represents an operation that may partially succeed or fail.
/// Ok: Core success data plus warnings from partial failures that allowed completion.
/// Err: Primary failure cause plus warnings collected before the failure occurred.
pub type PartialResult<T, E, W> = Result<( T, Vec<W> ), ( E, Vec<W> )>;

/// Appending to warning lists threaded through a pass.
pub trait Merge<T> {
	/// Appends a single item, returning the extended list.
	fn merge( self, item: T ) -> Self ;
	/// Appends every item of `other`, returning the extended list.
	fn merge_all( self, other: impl IntoIterator<Item = T> ) -> Self ;
}

impl<T> Merge<T> for Vec<T> {
	fn merge( mut self, item: T ) -> Self {
		self.push( item );
		self
	}
	fn merge_all( mut self, other: impl IntoIterator<Item = T> ) -> Self {
		self.extend( other );
		self
	}
}

#[cfg( test )]
mod tests {

	use super::Merge ;

	#[test]
	fn merge_preserves_order() {
		let merged = vec![ 1, 2 ].merge( 3 ).merge_all([ 4, 5 ]);
		assert_eq!( merged, vec![ 1, 2, 3, 4, 5 ]);
	}

}
