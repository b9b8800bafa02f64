/*!
A dynamic forest based on Sleator and Tarjan's *link-cut trees*, specifically their
[self-adjusting variant](https://doi.org/10.1145/800076.802464).

A link-cut tree is a rooted tree in which each node may have a designated *left* and/or *right*
child; edges to them are *solid*. All other children are *middle* children, attached only through
their own parent pointer. Each solid subtree is a binary tree representing a path of the
represented tree, read in in-order from the root side to the leaf side; a middle edge from `p` to
`c` represents an edge between `p` and the rootmost node of the solid subtree of `c`.

A node may carry a *flipped* bit, lazily reversing the orientation of its whole solid subtree;
this is what makes [evert](crate::EversibleRootedDynamicForest::evert()) cheap. The bit is pushed
down whenever the affected slots are read.

Node payloads ([LcNodeData]) decorate the kernel with edge weights: each payload stores path
weights relative to the node's auxiliary position and is reconciled by hooks on every rotation,
splice, attach and detach, so that after any public operation every stored delta equals the true
path weight in its scope.

The structural operations run in O(log n) amortized time.
*/

use std::fmt::{Display, Formatter};

use crate::{check_edge_vertices, check_vertex, DynamicForest, Error, EversibleRootedDynamicForest, NodeIdx, RootedDynamicForest, WeightedDynamicForest};
use crate::weight::{GroupWeight, MonoidWeight, NoWeight, WeightOrInfinity};
use crate::weight::WeightOrInfinity::{Finite, Infinite};

/// Enable or disable structure verification after every restructuring step.
const VERIFY : bool = cfg!( feature = "verify_lc" );


/// Link-cut forest without edge weights.
pub type EmptyLinkCutForest = LinkCutForest<EmptyLcData, true>;

/// Link-cut forest with edge weights forming a group.
pub type GroupLinkCutForest<TWeight> = LinkCutForest<GroupLcData<TWeight>, true>;

/// Link-cut forest with edge weights forming a monoid.
pub type MonoidLinkCutForest<TWeight> = LinkCutForest<MonoidLcData<TWeight>, true>;

/// Link-cut forest maintaining rooted trees without evert and without edge weights.
pub type RootedLinkCutForest = LinkCutForest<EmptyLcData, false>;


/// Payload attached to each link-cut node.
///
/// The associated functions are called by the kernel exactly where the auxiliary structure
/// changes, and must keep the stored weights consistent.
pub trait LcNodeData<const IMPL_EVERT : bool> : Clone + Display + Sized {
	/// The edge weight type.
	type Weight : MonoidWeight;

	/// Creates the payload of an isolated node.
	fn new() -> Self;

	/// The weight of the represented path between the associated node and its auxiliary parent.
	///
	/// The node must have a parent.
	fn parent_path_weight( &self ) -> Self::Weight;

	/// Called before rotating `v` with its (solid) parent.
	fn before_rotation( f : &mut LinkCutForest<Self, IMPL_EVERT>, v : NodeIdx );

	/// Called before splicing `v` to its parent.
	fn before_splice( f : &mut LinkCutForest<Self, IMPL_EVERT>, v : NodeIdx );

	/// Called after attaching `v` to its new parent with the given edge weight.
	fn after_attached( f : &mut LinkCutForest<Self, IMPL_EVERT>, v : NodeIdx, weight : Self::Weight );

	/// Called before detaching `v` from its parent.
	fn before_detached( f : &mut LinkCutForest<Self, IMPL_EVERT>, v : NodeIdx );
}


/// Internal node of a link-cut tree.
#[derive(Clone)]
struct LcNode<TData> {
	parent : Option<NodeIdx>,
	left : Option<NodeIdx>,
	right : Option<NodeIdx>,
	flipped : bool,
	data : TData
}

impl<TData> LcNode<TData> {
	fn new( data : TData ) -> LcNode<TData> {
		LcNode { parent : None, left : None, right : None, flipped : false, data }
	}
}


/// A forest of link-cut trees.
#[derive(Clone)]
pub struct LinkCutForest<TData : LcNodeData<IMPL_EVERT>, const IMPL_EVERT : bool> {
	nodes : Vec<LcNode<TData>>
}

impl<TData : LcNodeData<IMPL_EVERT>, const IMPL_EVERT : bool> LinkCutForest<TData, IMPL_EVERT> {
	/// Creates a new forest of `num_vertices` isolated vertices.
	pub fn new( num_vertices : usize ) -> Self {
		LinkCutForest { nodes : (0..num_vertices).map( |_| LcNode::new( TData::new() ) ).collect() }
	}

	/// The number of vertices in this forest.
	pub fn num_vertices( &self ) -> usize {
		self.nodes.len()
	}

	fn node( &self, v : NodeIdx ) -> &LcNode<TData> {
		&self.nodes[v.index()]
	}

	fn node_mut( &mut self, v : NodeIdx ) -> &mut LcNode<TData> {
		&mut self.nodes[v.index()]
	}

	/// The payload of `v`.
	pub fn data( &self, v : NodeIdx ) -> &TData {
		&self.node( v ).data
	}

	/// The payload of `v`, mutably.
	pub fn data_mut( &mut self, v : NodeIdx ) -> &mut TData {
		&mut self.node_mut( v ).data
	}

	/// Marks the solid subtree of `v` as reversed.
	fn flip( &mut self, v : NodeIdx ) {
		debug_assert!( IMPL_EVERT );
		self.node_mut( v ).flipped = !self.node( v ).flipped;
	}

	/// Clears the flipped bit of `v`, pushing it down to the solid children.
	pub(crate) fn push_flip( &mut self, v : NodeIdx ) {
		if !IMPL_EVERT {
			return;
		}
		if self.node( v ).flipped {
			let v_node = self.node_mut( v );
			v_node.flipped = false;
			( v_node.left, v_node.right ) = ( v_node.right, v_node.left );

			if let Some( c ) = self.node( v ).left {
				self.flip( c );
			}
			if let Some( c ) = self.node( v ).right {
				self.flip( c );
			}
		}
	}

	/// Whether `v` is a left or right child of `p`, assuming `p` is its parent.
	fn is_solid_child_hint( &self, v : NodeIdx, p : NodeIdx ) -> bool {
		self.node( p ).left == Some( v ) || self.node( p ).right == Some( v )
	}

	/// Whether `v` has a parent and a solid edge to that parent.
	fn is_solid_child( &self, v : NodeIdx ) -> bool {
		match self.node( v ).parent {
			Some( p ) => self.is_solid_child_hint( v, p ),
			None => false
		}
	}

	/// Whether `v` is a left child. The parent's flipped bit must be clear.
	pub(crate) fn is_left_child( &self, v : NodeIdx ) -> bool {
		if let Some( p ) = self.node( v ).parent {
			debug_assert!( !self.node( p ).flipped );
			self.node( p ).left == Some( v )
		}
		else {
			false
		}
	}

	/// The left solid child of `v`. The flipped bit of `v` must be clear.
	fn left_child( &self, v : NodeIdx ) -> Option<NodeIdx> {
		debug_assert!( !self.node( v ).flipped );
		self.node( v ).left
	}

	/// The root of the auxiliary tree containing `v`.
	fn aux_root( &self, v : NodeIdx ) -> NodeIdx {
		let mut x = v;
		while let Some( p ) = self.node( x ).parent {
			x = p;
		}
		x
	}

	/// Rotates `v` with its (solid) parent.
	fn rotate( &mut self, v : NodeIdx ) {
		TData::before_rotation( self, v );

		let p = self.node( v ).parent.unwrap();
		debug_assert!( self.is_solid_child_hint( v, p ) );

		// Update parent of v; if p was a middle child, v becomes one.
		let g_opt = self.node( p ).parent;
		self.node_mut( v ).parent = g_opt;
		if let Some( g ) = g_opt {
			self.push_flip( g );
			if self.node( g ).left == Some( p ) {
				self.node_mut( g ).left = Some( v );
			}
			else if self.node( g ).right == Some( p ) {
				self.node_mut( g ).right = Some( v );
			}
		}

		self.push_flip( p );
		self.push_flip( v );

		// Update parents of p and (possibly) the child switching sides
		self.node_mut( p ).parent = Some( v );
		if self.node( p ).left == Some( v ) {
			if let Some( c ) = self.node( v ).right {
				self.node_mut( c ).parent = Some( p );
				self.node_mut( p ).left = Some( c );
			}
			else {
				self.node_mut( p ).left = None;
			}
			self.node_mut( v ).right = Some( p );
		}
		else {
			debug_assert!( self.node( p ).right == Some( v ) );
			if let Some( c ) = self.node( v ).left {
				self.node_mut( c ).parent = Some( p );
				self.node_mut( p ).right = Some( c );
			}
			else {
				self.node_mut( p ).right = None;
			}
			self.node_mut( v ).left = Some( p );
		}

		if VERIFY { self.verify_structure() }
	}

	/// Splays `v` to the top of its solid subtree. Returns its (middle) parent afterwards, if any.
	fn splay_solid( &mut self, v : NodeIdx ) -> Option<NodeIdx> {
		loop {
			if let Some( p ) = self.node( v ).parent {
				if self.is_solid_child_hint( v, p ) {
					if let Some( g ) = self.solid_parent( p ) {
						self.push_flip( g );
						self.push_flip( p );

						let zig_zig = if self.node( p ).left == Some( v ) {
							self.node( g ).left == Some( p )
						}
						else {
							self.node( g ).right == Some( p )
						};
						if zig_zig {
							self.rotate( p );
							self.rotate( v );
						}
						else {
							self.rotate( v );
							self.rotate( v );
						}
					}
					else {
						// p is a solid root
						self.rotate( v );
					}
				}
				else {
					return Some( p );
				}
			}
			else {
				return None;
			}
		}
	}

	/// The parent of `v`, if `v` is a solid child.
	fn solid_parent( &self, v : NodeIdx ) -> Option<NodeIdx> {
		if let Some( p ) = self.node( v ).parent {
			if self.is_solid_child_hint( v, p ) {
				return Some( p );
			}
		}
		None
	}

	/// Makes `v` the right solid child of its parent, if it has one. Returns the parent.
	fn try_splice( &mut self, v : NodeIdx ) -> Option<NodeIdx> {
		if let Some( p ) = self.node( v ).parent {
			self.push_flip( p );
			TData::before_splice( self, v );
			self.node_mut( p ).right = Some( v );
			if VERIFY { self.verify_structure() }
			Some( p )
		}
		else {
			None
		}
	}

	/// Brings `v` to the root of its auxiliary tree, making its root path one solid path.
	///
	/// Returns the topmost splice point: the rootmost node at which the solid path towards `v`
	/// was attached. Directly after exposing some node `u` of the same tree, this is the lowest
	/// common ancestor of `u` and `v`.
	pub(crate) fn expose( &mut self, v : NodeIdx ) -> NodeIdx {
		// Splay within each solid subtree along the path
		let mut x_opt = Some( v );
		while let Some( x ) = x_opt {
			x_opt = self.splay_solid( x );
		}

		// Splice the path together, bottom-up
		let mut top = v;
		let mut x_opt = Some( v );
		while let Some( x ) = x_opt {
			x_opt = self.try_splice( x );
			if let Some( p ) = x_opt {
				top = p;
			}
		}

		// One final splay moves v to the auxiliary root
		self.splay_solid( v );
		debug_assert!( self.node( v ).parent.is_none() );
		top
	}

	/// Makes `v` the root of its represented tree.
	fn evert_node( &mut self, v : NodeIdx ) {
		debug_assert!( IMPL_EVERT );
		self.expose( v );
		self.push_flip( v );

		// The former ancestors of v become an ordinary (reversed) middle subtree.
		if let Some( c ) = self.node( v ).left {
			self.flip( c );
			self.node_mut( v ).left = None;
		}
	}

	/// Performs some sanity checks on the tree structure.
	fn verify_structure( &self ) {
		for v in (0..self.nodes.len()).map( NodeIdx::new ) {
			if let Some( c ) = self.node( v ).left {
				assert_eq!( self.node( c ).parent, Some( v ), "{c} has incorrect parent" );
			}
			if let Some( c ) = self.node( v ).right {
				assert_eq!( self.node( c ).parent, Some( v ), "{c} has incorrect parent" );
			}
			if self.node( v ).parent.is_some() {
				self.data( v ).parent_path_weight(); // Must not panic
			}
		}
	}

	fn write_subtree( &self, out : &mut Formatter<'_>, v : NodeIdx,
			child_map : &Vec<Vec<NodeIdx>>, indent : &str ) -> std::fmt::Result
	{
		out.write_str( indent )?;
		write!( out, "{}", v.index() )?;
		if let Some( p ) = self.node( v ).parent {
			if self.node( p ).left == Some( v ) {
				out.write_str( "L" )?;
			}
			else if self.node( p ).right == Some( v ) {
				out.write_str( "R" )?;
			}
		}
		if self.node( v ).flipped {
			out.write_str( "+" )?;
		}
		write!( out, "[{}]\n", self.data( v ) )?;

		fn indent_map( c : char ) -> char {
			match c {
				'├' => '│',
				'└' => ' ',
				'─' => ' ',
				x => x
			}
		}
		let child_indent : String = indent.chars().map( indent_map ).collect();
		let mut child_it = child_map[v.index()].iter().peekable();
		while let Some( c ) = child_it.next() {
			let indent_symbol = if child_it.peek().is_none() { "└─" } else { "├─" };
			self.write_subtree( out, *c, child_map, format!( "{}{}", child_indent, indent_symbol ).as_str() )?;
		}
		Ok( () )
	}
}

impl<TData : LcNodeData<IMPL_EVERT>, const IMPL_EVERT : bool> Display for LinkCutForest<TData, IMPL_EVERT> {
	/// Writes a human-readable rendering of the auxiliary trees, marking solid children with
	/// `L`/`R` and flipped nodes with `+`.
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		let mut child_map : Vec<Vec<NodeIdx>> = vec![vec![]; self.nodes.len()];
		for v in (0..self.nodes.len()).map( NodeIdx::new ) {
			if let Some( p ) = self.node( v ).parent {
				child_map[p.index()].push( v );
			}
		}
		for v in (0..self.nodes.len()).map( NodeIdx::new ) {
			if self.node( v ).parent.is_none() {
				self.write_subtree( f, v, &child_map, "" )?;
			}
		}
		Ok( () )
	}
}


impl<TData : LcNodeData<true>> DynamicForest for LinkCutForest<TData, true> {
	fn new( num_vertices : usize ) -> Self {
		LinkCutForest::new( num_vertices )
	}

	fn num_vertices( &self ) -> usize {
		self.nodes.len()
	}

	fn link( &mut self, u : usize, v : usize ) -> Result<(), Error> {
		self.link_weighted( u, v, TData::Weight::identity() )
	}

	fn cut( &mut self, u : usize, v : usize ) -> Result<(), Error> {
		let ( u, v ) = check_edge_vertices( self.num_vertices(), u, v )?;
		self.evert_node( v );
		self.expose( u );
		self.push_flip( u );

		// After everting v, the edge (u,v) exists iff the strict-ancestor subtree of u is
		// exactly {v}.
		if self.node( u ).left != Some( v ) {
			return Err( Error::PreconditionViolated( "cannot cut an edge that is not in the forest" ) );
		}
		self.push_flip( v );
		if self.node( v ).right.is_some() {
			return Err( Error::PreconditionViolated( "cannot cut an edge that is not in the forest" ) );
		}

		TData::before_detached( self, v );
		self.node_mut( u ).left = None;
		self.node_mut( v ).parent = None;
		Ok( () )
	}

	fn connected( &mut self, u : usize, v : usize ) -> Result<bool, Error> {
		let u = check_vertex( self.num_vertices(), u )?;
		let v = check_vertex( self.num_vertices(), v )?;
		if u == v {
			return Ok( true );
		}
		self.expose( u );
		self.expose( v );
		Ok( self.aux_root( u ) == v )
	}
}

impl<TData : LcNodeData<true>> WeightedDynamicForest for LinkCutForest<TData, true> {
	type Weight = TData::Weight;

	fn link_weighted( &mut self, u : usize, v : usize, weight : TData::Weight ) -> Result<(), Error> {
		let ( u, v ) = check_edge_vertices( self.num_vertices(), u, v )?;
		self.expose( u );
		self.expose( v );
		// If u and v were in the same tree, the second expose gave u a parent again.
		if self.node( u ).parent.is_some() {
			return Err( Error::PreconditionViolated( "cannot link two vertices in the same tree" ) );
		}
		self.evert_node( u );
		self.node_mut( u ).parent = Some( v );
		TData::after_attached( self, u, weight );
		Ok( () )
	}

	fn path_weight( &mut self, u : usize, v : usize ) -> Result<Option<TData::Weight>, Error> {
		let u = check_vertex( self.num_vertices(), u )?;
		let v = check_vertex( self.num_vertices(), v )?;
		if u == v {
			return Ok( Some( TData::Weight::identity() ) );
		}
		self.expose( u );
		self.expose( v );

		// u now has constant depth below the auxiliary root v; sum the parent distances.
		let mut w = TData::Weight::identity();
		let mut x = u;
		while let Some( p ) = self.node( x ).parent {
			w = w + self.data( x ).parent_path_weight();
			x = p;
		}
		if x == v {
			Ok( Some( w ) )
		}
		else {
			Ok( None )
		}
	}
}

impl<TData : LcNodeData<IMPL_EVERT>, const IMPL_EVERT : bool> RootedDynamicForest for LinkCutForest<TData, IMPL_EVERT> {
	fn new( num_vertices : usize ) -> Self {
		LinkCutForest::new( num_vertices )
	}

	fn num_vertices( &self ) -> usize {
		self.nodes.len()
	}

	fn link( &mut self, u : usize, v : usize ) -> Result<(), Error> {
		let ( u, v ) = check_edge_vertices( self.num_vertices(), u, v )?;
		self.expose( u );
		self.push_flip( u );
		if self.node( u ).left.is_some() {
			return Err( Error::PreconditionViolated( "only a tree root can be linked below another vertex" ) );
		}
		self.expose( v );
		if self.node( u ).parent.is_some() {
			return Err( Error::PreconditionViolated( "cannot link two vertices in the same tree" ) );
		}
		self.node_mut( u ).parent = Some( v );
		TData::after_attached( self, u, TData::Weight::identity() );
		Ok( () )
	}

	fn cut_from_parent( &mut self, v : usize ) -> Result<(), Error> {
		let v = check_vertex( self.num_vertices(), v )?;
		self.expose( v );
		self.push_flip( v );
		match self.node( v ).left {
			Some( anc ) => {
				TData::before_detached( self, anc );
				self.node_mut( v ).left = None;
				self.node_mut( anc ).parent = None;
				Ok( () )
			}
			None => Err( Error::PreconditionViolated( "cannot cut a tree root from its parent" ) )
		}
	}

	fn find_root( &mut self, v : usize ) -> Result<usize, Error> {
		let v = check_vertex( self.num_vertices(), v )?;
		self.expose( v );
		self.push_flip( v );
		let mut r = v;
		while let Some( l ) = self.left_child( r ) {
			r = l;
			self.push_flip( r );
		}
		self.expose( r ); // Only for the amortized analysis
		Ok( r.index() )
	}

	fn lowest_common_ancestor( &mut self, u : usize, v : usize ) -> Result<Option<usize>, Error> {
		let u = check_vertex( self.num_vertices(), u )?;
		let v = check_vertex( self.num_vertices(), v )?;
		if u == v {
			return Ok( Some( u.index() ) );
		}
		self.expose( u );
		let top = self.expose( v );
		if self.aux_root( u ) == v {
			Ok( Some( top.index() ) )
		}
		else {
			Ok( None )
		}
	}
}

impl<TData : LcNodeData<true>> EversibleRootedDynamicForest for LinkCutForest<TData, true> {
	fn evert( &mut self, v : usize ) -> Result<(), Error> {
		let v = check_vertex( self.num_vertices(), v )?;
		self.evert_node( v );
		Ok( () )
	}
}


/// Payload storing nothing; for connectivity and rooted queries in unweighted forests.
#[derive(Clone)]
pub struct EmptyLcData {}

impl Display for EmptyLcData {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "" )
	}
}

impl<const IMPL_EVERT : bool> LcNodeData<IMPL_EVERT> for EmptyLcData {
	type Weight = NoWeight;

	fn new() -> Self { EmptyLcData {} }

	fn parent_path_weight( &self ) -> NoWeight {
		NoWeight::identity()
	}

	fn before_rotation( _ : &mut LinkCutForest<Self, IMPL_EVERT>, _ : NodeIdx ) {}

	fn before_splice( _ : &mut LinkCutForest<Self, IMPL_EVERT>, _ : NodeIdx ) {}

	fn after_attached( _ : &mut LinkCutForest<Self, IMPL_EVERT>, _ : NodeIdx, _ : NoWeight ) {}

	fn before_detached( _ : &mut LinkCutForest<Self, IMPL_EVERT>, _ : NodeIdx ) {}
}


/// Payload storing the distance to the auxiliary parent. Weights must form a group.
#[derive(Clone, Debug)]
pub struct GroupLcData<TWeight : GroupWeight> {
	/// Represented path weight to the auxiliary parent, or infinity at an auxiliary root.
	pdist : WeightOrInfinity<TWeight>
}

impl<TWeight : GroupWeight> Display for GroupLcData<TWeight> {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}", self.pdist )
	}
}

impl<TWeight : GroupWeight> LcNodeData<true> for GroupLcData<TWeight> {
	type Weight = TWeight;

	fn new() -> Self {
		GroupLcData { pdist : Infinite }
	}

	fn parent_path_weight( &self ) -> TWeight {
		self.pdist.unwrap()
	}

	fn before_rotation( f : &mut LinkCutForest<Self, true>, v : NodeIdx ) {
		let p = f.node( v ).parent.unwrap();

		// Make left/right meaningful for p, v, and v's children
		if let Some( g ) = f.node( p ).parent {
			f.push_flip( g );
		}
		f.push_flip( p );
		f.push_flip( v );

		// The child switching parent from v to p
		let c_opt = if f.is_left_child( v ) {
			f.node( v ).right
		} else {
			f.node( v ).left
		};

		let dist_v_p = f.data( v ).pdist;
		let dist_p_g = f.data( p ).pdist;

		if let Some( c ) = c_opt {
			f.data_mut( c ).pdist = dist_v_p - f.data( c ).pdist.unwrap(); // d(v,p) - d(c,v)
		}

		// v becomes the parent of p
		f.data_mut( p ).pdist = dist_v_p;

		// Middle parents count as left parents here.
		if ( f.node( p ).left == Some( v ) ) != f.is_left_child( p ) {
			// v lies between p and g in the represented tree, or p is an auxiliary root
			f.data_mut( v ).pdist = dist_p_g - dist_v_p.unwrap(); // d(g,p) - d(v,p) = d(v,g)
		}
		else {
			f.data_mut( v ).pdist = dist_p_g + dist_v_p.unwrap(); // d(g,p) + d(v,p) = d(v,g)
		}
	}

	fn before_splice( _ : &mut LinkCutForest<Self, true>, _ : NodeIdx ) {
		// A splice turns a middle edge into a right solid edge; the parent distance is unchanged.
	}

	fn after_attached( f : &mut LinkCutForest<Self, true>, v : NodeIdx, weight : TWeight ) {
		f.data_mut( v ).pdist = Finite( weight );
	}

	fn before_detached( f : &mut LinkCutForest<Self, true>, v : NodeIdx ) {
		f.data_mut( v ).pdist = Infinite;
	}
}


/// Payload storing the distances to the auxiliary parent and to the nearest far-side ancestor.
///
/// Works for any monoid weight, at the cost of one extra stored weight compared to
/// [GroupLcData].
#[derive(Clone, Debug)]
pub struct MonoidLcData<TWeight : MonoidWeight> {
	/// Represented path weight to the auxiliary parent, or infinity at an auxiliary root.
	pdist : WeightOrInfinity<TWeight>,

	/// Represented path weight to the nearest ancestor on the other side than the parent, or
	/// infinity if no such ancestor exists. Middle parents count as left parents.
	adist : WeightOrInfinity<TWeight>
}

impl<TWeight : MonoidWeight> Display for MonoidLcData<TWeight> {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}/{}", self.pdist, self.adist )
	}
}

impl<TWeight : MonoidWeight> LcNodeData<true> for MonoidLcData<TWeight> {
	type Weight = TWeight;

	fn new() -> Self {
		MonoidLcData { pdist : Infinite, adist : Infinite }
	}

	fn parent_path_weight( &self ) -> TWeight {
		self.pdist.unwrap()
	}

	fn before_rotation( f : &mut LinkCutForest<Self, true>, v : NodeIdx ) {
		let p = f.node( v ).parent.unwrap();

		if let Some( g ) = f.node( p ).parent {
			f.push_flip( g );
		}
		f.push_flip( p );
		f.push_flip( v );

		// The child switching parent from v to p; its parent and far-side distances swap.
		let c_opt = if f.is_left_child( v ) {
			f.node( v ).right
		} else {
			f.node( v ).left
		};
		if let Some( c ) = c_opt {
			let c_data = f.data_mut( c );
			( c_data.pdist, c_data.adist ) = ( c_data.adist, c_data.pdist );
		}

		let old_v_data = f.data( v ).clone();
		let old_p_data = f.data( p ).clone();

		// v becomes the parent of p
		f.data_mut( p ).pdist = old_v_data.pdist; // d(p,v)

		// Middle parents count as left parents here.
		if ( f.node( p ).left == Some( v ) ) != f.is_left_child( p ) {
			// v lies between p and g in the represented tree, or p is an auxiliary root
			f.data_mut( v ).pdist = old_v_data.adist; // d(v,g), or infinity without g

			// If p is no far-side ancestor holder, old_p.adist is infinity as well, so this
			// covers both cases.
			f.data_mut( v ).adist = old_v_data.pdist + old_p_data.adist; // d(v,p) + d(p,a) = d(v,a)
		}
		else {
			// p lies between v and g in the represented tree, or p is an auxiliary root
			f.data_mut( v ).pdist = old_v_data.pdist + old_p_data.pdist; // d(v,p) + d(p,g) = d(v,g)
			// v's far-side distance does not change
			f.data_mut( p ).adist = old_p_data.pdist; // d(p,g)
		}
	}

	fn before_splice( f : &mut LinkCutForest<Self, true>, v : NodeIdx ) {
		// A splice turns a middle edge into a right solid edge; both distances are unchanged.
		debug_assert!( !f.is_solid_child( f.node( v ).parent.unwrap() ) );
	}

	fn after_attached( f : &mut LinkCutForest<Self, true>, v : NodeIdx, weight : TWeight ) {
		f.data_mut( v ).pdist = Finite( weight );
	}

	fn before_detached( f : &mut LinkCutForest<Self, true>, v : NodeIdx ) {
		f.data_mut( v ).pdist = Infinite;
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use crate::weight::I64SumWeight;

	#[test]
	fn test_connectivity_basics() {
		let mut f = EmptyLinkCutForest::new( 5 );
		DynamicForest::link( &mut f, 1, 2 ).unwrap();
		DynamicForest::link( &mut f, 2, 3 ).unwrap();
		DynamicForest::link( &mut f, 3, 4 ).unwrap();
		DynamicForest::link( &mut f, 0, 2 ).unwrap();
		assert_eq!( f.connected( 0, 4 ), Ok( true ) );
		assert_eq!( f.connected( 0, 0 ), Ok( true ) );
		DynamicForest::cut( &mut f, 1, 2 ).unwrap();
		assert_eq!( f.connected( 0, 1 ), Ok( false ) );
		assert_eq!( f.connected( 0, 4 ), Ok( true ) );
	}

	#[test]
	fn test_cut_rejects_non_edges() {
		let mut f = EmptyLinkCutForest::new( 4 );
		DynamicForest::link( &mut f, 0, 1 ).unwrap();
		DynamicForest::link( &mut f, 1, 2 ).unwrap();
		// Connected, but not adjacent
		assert!( DynamicForest::cut( &mut f, 0, 2 ).is_err() );
		// Different trees
		assert!( DynamicForest::cut( &mut f, 0, 3 ).is_err() );
		// The failed cuts must not have changed anything
		assert_eq!( f.connected( 0, 2 ), Ok( true ) );
	}

	#[test]
	fn test_path_weights_along_path() {
		let mut f = GroupLinkCutForest::<I64SumWeight>::new( 4 );
		f.link_weighted( 0, 1, I64SumWeight::new( 1 ) ).unwrap();
		f.link_weighted( 1, 2, I64SumWeight::new( 2 ) ).unwrap();
		f.link_weighted( 2, 3, I64SumWeight::new( 4 ) ).unwrap();
		assert_eq!( f.path_weight( 0, 3 ), Ok( Some( I64SumWeight::new( 7 ) ) ) );
		assert_eq!( f.path_weight( 1, 2 ), Ok( Some( I64SumWeight::new( 2 ) ) ) );
		assert_eq!( f.path_weight( 3, 3 ), Ok( Some( I64SumWeight::identity() ) ) );
		DynamicForest::cut( &mut f, 1, 2 ).unwrap();
		assert_eq!( f.path_weight( 0, 3 ), Ok( None ) );
	}

	#[test]
	fn test_rooted_operations() {
		let mut f = RootedLinkCutForest::new( 6 );
		// Build:    0
		//          / \
		//         1   2
		//        / \
		//       3   4   and isolated 5
		RootedDynamicForest::link( &mut f, 1, 0 ).unwrap();
		RootedDynamicForest::link( &mut f, 2, 0 ).unwrap();
		RootedDynamicForest::link( &mut f, 3, 1 ).unwrap();
		RootedDynamicForest::link( &mut f, 4, 1 ).unwrap();
		assert_eq!( f.find_root( 3 ), Ok( 0 ) );
		assert_eq!( f.find_root( 5 ), Ok( 5 ) );
		assert_eq!( f.lowest_common_ancestor( 3, 4 ), Ok( Some( 1 ) ) );
		assert_eq!( f.lowest_common_ancestor( 3, 2 ), Ok( Some( 0 ) ) );
		assert_eq!( f.lowest_common_ancestor( 3, 1 ), Ok( Some( 1 ) ) );
		assert_eq!( f.lowest_common_ancestor( 3, 5 ), Ok( None ) );
		// Only roots can be linked below other vertices
		assert!( RootedDynamicForest::link( &mut f, 1, 5 ).is_err() );
		f.cut_from_parent( 1 ).unwrap();
		assert_eq!( f.find_root( 3 ), Ok( 1 ) );
		assert_eq!( f.lowest_common_ancestor( 3, 2 ), Ok( None ) );
		assert!( f.cut_from_parent( 1 ).is_err() );
	}

	#[test]
	fn test_evert_changes_root() {
		let mut f = EmptyLinkCutForest::new( 4 );
		RootedDynamicForest::link( &mut f, 1, 0 ).unwrap();
		RootedDynamicForest::link( &mut f, 2, 1 ).unwrap();
		RootedDynamicForest::link( &mut f, 3, 2 ).unwrap();
		assert_eq!( f.find_root( 3 ), Ok( 0 ) );
		f.evert( 3 ).unwrap();
		assert_eq!( f.find_root( 0 ), Ok( 3 ) );
		assert_eq!( f.lowest_common_ancestor( 0, 2 ), Ok( Some( 2 ) ) );
	}
}
