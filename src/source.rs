//! Sources of candidate type descriptors.

use crate::descriptor::TypeDescriptor ;



/// Supplies the descriptors a discovery pass runs over.
///
/// Enumeration order is the order in which the resulting actions are applied,
/// so implementations should enumerate deterministically.
pub trait TypeDescriptorSource {

	/// Iterator over the descriptors of this source.
	type Iter<'a>: Iterator<Item = &'a TypeDescriptor> where Self: 'a ;

	/// Enumerates every descriptor of this source, in a stable order.
	fn enumerate( &self ) -> Self::Iter<'_> ;

}

impl TypeDescriptorSource for [TypeDescriptor] {
	type Iter<'a> = std::slice::Iter<'a, TypeDescriptor> ;
	fn enumerate( &self ) -> Self::Iter<'_> { self.iter() }
}

impl TypeDescriptorSource for Vec<TypeDescriptor> {
	type Iter<'a> = std::slice::Iter<'a, TypeDescriptor> ;
	fn enumerate( &self ) -> Self::Iter<'_> { self.iter() }
}

impl<const N: usize> TypeDescriptorSource for [TypeDescriptor; N] {
	type Iter<'a> = std::slice::Iter<'a, TypeDescriptor> ;
	fn enumerate( &self ) -> Self::Iter<'_> { self.iter() }
}
