mod partial_success ;

pub use partial_success::{ PartialSuccess, PartialResult, Merge };
