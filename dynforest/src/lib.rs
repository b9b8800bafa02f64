/*!
Dynamic forest data structures over a fixed vertex set.

This crate maintains collections of unrooted trees, a.k.a. *dynamic forests*, under online
edge insertions ([link](DynamicForest::link())), edge deletions ([cut](DynamicForest::cut())) and
connectivity queries ([connected](DynamicForest::connected())). The vertex set is fixed at
construction; adding or removing vertices is not supported.

Most engines in this crate are based on *search trees on trees* (STTs) as defined in
[\[BK22\]](https://doi.org/10.1137/1.9781611977073.75), with three alternative online
restructuring policies ([Greedy Splay](stt::GreedySplayForest),
[Move-to-Root](stt::MoveToRootForest), [Local Two-Pass](stt::LocalTwoPassForest)). A
[link-cut tree](link_cut::LinkCutForest) engine in the style of
[\[ST83\]](https://doi.org/10.1145/800076.802464) additionally maintains rooted trees with
[evert](EversibleRootedDynamicForest::evert()), lowest common ancestors and optional edge
weights. A [naive reference engine](naive::NaiveForest) answers the same queries by walking
parent pointers and encodes the behavioural contract for the others.

All structural operations validate their preconditions and report violations as
[`Error::PreconditionViolated`]; see [Error].


# Examples

```
use dynforest::{DynamicForest, Forest};

// A forest of four isolated vertices, using the default (greedy splay) engine
let mut f = Forest::new( 4 );

f.link( 0, 1 ).unwrap();
f.link( 1, 2 ).unwrap();

assert_eq!( f.connected( 0, 2 ), Ok( true ) );
assert_eq!( f.connected( 0, 3 ), Ok( false ) );

f.cut( 1, 2 ).unwrap();
assert_eq!( f.connected( 0, 2 ), Ok( false ) );

// Cutting a non-edge is reported, not executed
assert!( f.cut( 0, 2 ).is_err() );
```

```
use dynforest::WeightedDynamicForest;
use dynforest::link_cut::GroupLinkCutForest;
use dynforest::weight::I64SumWeight;

// A link-cut forest with signed additive edge weights
let mut f = GroupLinkCutForest::<I64SumWeight>::new( 3 );
f.link_weighted( 0, 1, I64SumWeight::new( 2 ) ).unwrap();
f.link_weighted( 1, 2, I64SumWeight::new( 3 ) ).unwrap();
assert_eq!( f.path_weight( 0, 2 ), Ok( Some( I64SumWeight::new( 5 ) ) ) );
```

# Crate feature flags

The following crate feature flags are available. They are configured in your `Cargo.toml`.

* `space_efficient_nodes`
	* Optional, requires the `nonmax` crate.
	* Improve node space usage. Disallows the maximum node index 2^64-1 and incurs a small runtime
		cost to check that this node index is not used.
* `petgraph`
	* Optional, requires the `petgraph` crate.
	* Enable a petgraph-based oracle forest. Very slow; only intended for verification.
* `generate`
	* Optional, requires the `rand` crate.
	* Enables random workload generation and the equivalence tester. Used by tests.
* `count_rotations`
	* Optional. Count STT rotations per forest instance, for diagnostics.
* `verify_lc`
	* Optional. WARNING: very slow.
	* Verify the link-cut tree structure while running.

# Literature

\[BK22\] Benjamin Aram Berendsohn and László Kozma. Splay trees on trees.
Proceedings of the 2022 ACM-SIAM Symposium on Discrete Algorithms, SODA 2022, 1875–1900, 2022.
doi:[10.1137/1.9781611977073.75](https://doi.org/10.1137/1.9781611977073.75)

\[ST83\] Daniel D. Sleator and Robert Endre Tarjan. A Data Structure for Dynamic Trees.
Journal of Computer and System Sciences, 26(3):362–391, 1983.
doi:[10.1145/800076.802464](https://doi.org/10.1145/800076.802464)
*/

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::private_doc_tests)]


use std::fmt::{Display, Formatter};

#[cfg( feature = "space_efficient_nodes" )]
use nonmax::NonMaxUsize;

pub mod error;
pub mod link_cut;
pub mod naive;
pub mod stt;
pub mod weight;
pub mod workload;

#[cfg( feature = "generate" )]
pub mod verify;

#[cfg( feature = "petgraph" )]
pub mod pg;

pub use error::Error;
use weight::MonoidWeight;

/// The default dynamic forest engine.
pub type Forest = stt::GreedySplayForest;


/// Represents a node in a dynamic forest to the outside world.
#[cfg( not( feature = "space_efficient_nodes" ) )]
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeIdx {
	raw_idx : usize
}

#[cfg( not( feature = "space_efficient_nodes" ) )]
impl NodeIdx {
	/// Convert `usize` into `NodeIdx`.
	///
	/// Use with care, as this can circumvent bounds checking.
	pub fn new( idx : usize ) -> NodeIdx {
		NodeIdx { raw_idx : idx }
	}

	/// Convert this into `usize`.
	#[inline]
	pub fn index( &self ) -> usize {
		self.raw_idx
	}
}


/// Represents a node in a dynamic forest to the outside world.
#[cfg( feature = "space_efficient_nodes" )]
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NodeIdx {
	raw_idx : NonMaxUsize
}

#[cfg( feature = "space_efficient_nodes" )]
impl NodeIdx {
	/// Convert `usize` into `NodeIdx`.
	///
	/// Use with care, as this can circumvent bounds checking.
	pub fn new( idx : usize ) -> NodeIdx {
		NodeIdx { raw_idx : NonMaxUsize::new( idx ).unwrap() }
	}

	/// Convert this into `usize`.
	#[inline]
	pub fn index( &self ) -> usize {
		self.raw_idx.get()
	}
}

impl Display for NodeIdx {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}", self.index() )
	}
}


/// Checks that `v` is a valid vertex index for a forest on `num_vertices` vertices.
pub(crate) fn check_vertex( num_vertices : usize, v : usize ) -> Result<NodeIdx, Error> {
	if v < num_vertices {
		Ok( NodeIdx::new( v ) )
	}
	else {
		Err( Error::PreconditionViolated( "vertex index out of range" ) )
	}
}

/// Checks that `u`, `v` are valid and distinct vertex indices.
pub(crate) fn check_edge_vertices( num_vertices : usize, u : usize, v : usize )
	-> Result<(NodeIdx, NodeIdx), Error>
{
	if u == v {
		return Err( Error::PreconditionViolated( "endpoints of a structural operation must be distinct" ) );
	}
	Ok( ( check_vertex( num_vertices, u )?, check_vertex( num_vertices, v )? ) )
}


/// A dynamic forest on unrooted, unweighted trees.
///
/// Every operation takes plain vertex indices in `0..num_vertices` and validates them; structural
/// preconditions (edges must cross a tree boundary when linking, must exist when cutting) are
/// validated as well and reported as [Error::PreconditionViolated]. A failed operation leaves the
/// represented forest unchanged.
pub trait DynamicForest {
	/// Creates a new dynamic forest with the specified number of vertices and no edges.
	fn new( num_vertices : usize ) -> Self;

	/// The number of vertices in this forest.
	fn num_vertices( &self ) -> usize;

	/// Adds an edge between `u` and `v`.
	///
	/// Fails if `u` and `v` are in the same tree.
	fn link( &mut self, u : usize, v : usize ) -> Result<(), Error>;

	/// Removes the edge between `u` and `v`.
	///
	/// Fails if no such edge exists.
	fn cut( &mut self, u : usize, v : usize ) -> Result<(), Error>;

	/// Indicates whether `u` and `v` are in the same tree.
	///
	/// `connected( u, u )` is true for every valid vertex `u`; apart from range checking, this
	/// operation cannot fail.
	fn connected( &mut self, u : usize, v : usize ) -> Result<bool, Error>;
}


/// A dynamic forest with edge weights.
///
/// [DynamicForest::link()] adds an edge with identity weight.
pub trait WeightedDynamicForest : DynamicForest {
	/// The edge weight type.
	type Weight : MonoidWeight;

	/// Adds an edge between `u` and `v` with the given weight.
	///
	/// Fails if `u` and `v` are in the same tree.
	fn link_weighted( &mut self, u : usize, v : usize, weight : Self::Weight ) -> Result<(), Error>;

	/// Computes the total weight of the path between `u` and `v`, or `None` if no such path
	/// exists.
	fn path_weight( &mut self, u : usize, v : usize ) -> Result<Option<Self::Weight>, Error>;
}


/// A dynamic forest on rooted, unweighted trees.
pub trait RootedDynamicForest {
	/// Creates a new dynamic forest with the specified number of vertices and no edges.
	fn new( num_vertices : usize ) -> Self;

	/// The number of vertices in this forest.
	fn num_vertices( &self ) -> usize;

	/// Adds `u` as a child of `v`.
	///
	/// Fails unless `u` is the root of a tree not containing `v`.
	fn link( &mut self, u : usize, v : usize ) -> Result<(), Error>;

	/// Removes the edge between `v` and its parent.
	///
	/// Fails if `v` is a tree root.
	fn cut_from_parent( &mut self, v : usize ) -> Result<(), Error>;

	/// Returns the root of the tree containing `v`.
	fn find_root( &mut self, v : usize ) -> Result<usize, Error>;

	/// Returns the lowest common ancestor of `u` and `v`, or `None` if `u` and `v` are in
	/// different trees.
	fn lowest_common_ancestor( &mut self, u : usize, v : usize ) -> Result<Option<usize>, Error>;
}


/// A rooted dynamic forest that can change the root of each tree.
pub trait EversibleRootedDynamicForest : RootedDynamicForest {
	/// Makes `v` the root of its tree.
	fn evert( &mut self, v : usize ) -> Result<(), Error>;
}
