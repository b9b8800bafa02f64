//! Dynamic forests based on 2-cut search trees on trees.
//!
//! [Stt] is the auxiliary forest itself: an arena of nodes carrying only `parent` and the two
//! separator-child slots, plus the rotation kernel that rearranges it. [SttForest] wraps an [Stt]
//! together with an [AccessPolicy] into a [DynamicForest] engine.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::iter::Map;
use std::marker::PhantomData;
use std::ops::Range;

use crate::{check_edge_vertices, check_vertex, DynamicForest, Error, NodeIdx};

mod greedy;
mod ltp;
mod mtr;

pub use greedy::GreedySplay;
pub use ltp::LocalTwoPass;
pub use mtr::MoveToRoot;

/// A dynamic forest restructured by the greedy splay policy.
pub type GreedySplayForest = SttForest<GreedySplay>;

/// A dynamic forest restructured by the move-to-root policy.
pub type MoveToRootForest = SttForest<MoveToRoot>;

/// A dynamic forest restructured by the local two-pass splay policy.
pub type LocalTwoPassForest = SttForest<LocalTwoPass>;


/// The separator type of a node: its position in its parent's separator slots.
///
/// This is derived from the parent's slots on demand and never stored. The rotation primitives
/// return the separator type of the rotated node, so callers can chain rotations without
/// re-reading slots.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SepType {
	/// The node occupies no separator slot of its parent (or is a root).
	NoSep,

	/// The node is the direct separator child: it separates its parent from its grandparent.
	Direct,

	/// The node is the indirect separator child.
	Indirect
}

impl SepType {
	/// Whether this type marks a separator node.
	#[inline]
	pub fn is_sep( self ) -> bool {
		self != SepType::NoSep
	}
}


/// Internal node: three nullable references and nothing else.
#[derive(Clone, Debug)]
struct SttNode {
	/// The parent of this node in the search tree.
	parent : Option<NodeIdx>,

	/// The unique child whose subtree boundary contains this node's parent, if any.
	dsep : Option<NodeIdx>,

	/// The unique child with boundary size two whose boundary does not contain this node's
	/// parent, if any.
	isep : Option<NodeIdx>
}

impl SttNode {
	fn new() -> SttNode {
		SttNode { parent : None, dsep : None, isep : None }
	}
}


/// A forest of 2-cut search trees on trees.
///
/// Offers the raw structure: reading slots, rotations, attaching and detaching roots. Maintaining
/// the 2-cut invariants across a sequence of rotations is the job of the access policies; the
/// kernel only requires each single rotation to be legal ([can_rotate](Stt::can_rotate())).
#[derive(Clone)]
pub struct Stt {
	nodes : Vec<SttNode>,

	#[cfg( feature = "count_rotations" )]
	num_rotations : u64
}

impl Stt {
	/// Creates a new forest of `n` isolated nodes.
	pub fn new( n : usize ) -> Stt {
		Stt {
			nodes : (0..n).map( |_| SttNode::new() ).collect(),

			#[cfg( feature = "count_rotations" )]
			num_rotations : 0
		}
	}

	/// The number of nodes in this forest.
	pub fn num_nodes( &self ) -> usize {
		self.nodes.len()
	}

	fn node( &self, v : NodeIdx ) -> &SttNode {
		&self.nodes[v.index()]
	}

	fn node_mut( &mut self, v : NodeIdx ) -> &mut SttNode {
		&mut self.nodes[v.index()]
	}

	/// The parent of `v` in the search tree, if any.
	#[inline]
	pub fn parent( &self, v : NodeIdx ) -> Option<NodeIdx> {
		self.node( v ).parent
	}

	/// The direct separator child of `v`, if any.
	#[inline]
	pub fn dsep_child( &self, v : NodeIdx ) -> Option<NodeIdx> {
		self.node( v ).dsep
	}

	/// The indirect separator child of `v`, if any.
	#[inline]
	pub fn isep_child( &self, v : NodeIdx ) -> Option<NodeIdx> {
		self.node( v ).isep
	}

	/// The separator type of `v`, given that `p` is the parent of `v`.
	#[inline]
	pub fn sep_type_hint( &self, v : NodeIdx, p : NodeIdx ) -> SepType {
		let p_node = self.node( p );
		if p_node.dsep == Some( v ) {
			SepType::Direct
		}
		else if p_node.isep == Some( v ) {
			SepType::Indirect
		}
		else {
			SepType::NoSep
		}
	}

	/// The separator type of `v`. Roots are [SepType::NoSep].
	#[inline]
	pub fn sep_type( &self, v : NodeIdx ) -> SepType {
		match self.node( v ).parent {
			Some( p ) => self.sep_type_hint( v, p ),
			None => SepType::NoSep
		}
	}

	/// Whether `v` occupies a separator slot of its parent.
	#[inline]
	pub fn is_separator( &self, v : NodeIdx ) -> bool {
		self.sep_type( v ).is_sep()
	}

	/// Whether rotating `v` above its parent is legal: `v` has a parent, and `v` is a separator
	/// or the parent is not.
	pub fn can_rotate( &self, v : NodeIdx ) -> bool {
		if let Some( p ) = self.parent( v ) {
			self.sep_type_hint( v, p ).is_sep() || !self.is_separator( p )
		}
		else {
			false
		}
	}

	#[inline]
	fn count_rotation( &mut self ) {
		#[cfg( feature = "count_rotations" )]
		{
			self.num_rotations += 1;
		}
	}

	/// The number of rotations performed by this forest so far.
	#[cfg( feature = "count_rotations" )]
	pub fn num_rotations( &self ) -> u64 {
		self.num_rotations
	}

	/// Rotates `v` above its parent and returns the separator type of `v` afterwards.
	///
	/// Requires that the rotation is legal (see [can_rotate](Stt::can_rotate())). The returned
	/// type is the slot `v` inherited from its old parent, so callers chaining rotations never
	/// have to re-read it.
	pub fn rotate( &mut self, v : NodeIdx ) -> SepType {
		self.count_rotation();
		let p = self.node( v ).parent.unwrap();
		debug_assert!( self.is_separator( v ) || !self.is_separator( p ) );

		let g = self.node( p ).parent;
		let c = self.node( v ).dsep;

		// Change parents
		self.node_mut( v ).parent = g;
		self.node_mut( p ).parent = Some( v );

		// c switches parent from v to p; its subtree keeps separating the same pair of nodes,
		// but their roles swap.
		if let Some( c ) = c {
			self.node_mut( c ).parent = Some( p );
			let c_node = self.node_mut( c );
			( c_node.dsep, c_node.isep ) = ( c_node.isep, c_node.dsep );
		}

		let mut p_type = SepType::NoSep;
		if let Some( g ) = g { // p was not the root
			let old_p_dsep = self.node( p ).dsep;

			// Change the isep slot of p
			if old_p_dsep.is_some() && old_p_dsep != Some( v ) {
				self.node_mut( p ).isep = old_p_dsep;
			}
			else if self.node( p ).isep == Some( v ) {
				self.node_mut( p ).isep = None;
			}

			// v takes over p's slot at g
			if self.node( g ).dsep == Some( p ) {
				p_type = SepType::Direct;
				self.node_mut( g ).dsep = Some( v );
			}
			else if self.node( g ).isep == Some( p ) {
				p_type = SepType::Indirect;
				self.node_mut( g ).isep = Some( v );
			}

			if old_p_dsep != Some( v ) {
				// p separates v and g
				self.node_mut( v ).dsep = Some( p );
			}
			else {
				// v separates p and g
				self.node_mut( v ).dsep = self.node( v ).isep;
				self.node_mut( v ).isep = if p_type.is_sep() { Some( p ) } else { None };
			}
		}
		else { // p was the root
			self.node_mut( v ).dsep = None;
			debug_assert!( self.node( v ).isep.is_none() );
		}

		self.node_mut( p ).dsep = c;
		p_type
	}

	/// [rotate](Stt::rotate()) for a `v` known to be the direct separator child of its parent.
	pub fn rotate_dsep( &mut self, v : NodeIdx ) -> SepType {
		self.count_rotation();
		let p = self.node( v ).parent.unwrap();
		debug_assert!( self.node( p ).dsep == Some( v ) );
		let g = self.node( p ).parent.unwrap(); // v is a direct separator, so p is not the root
		let c = self.node( v ).dsep;

		self.node_mut( v ).parent = Some( g );
		self.node_mut( p ).parent = Some( v );

		if let Some( c ) = c {
			self.node_mut( c ).parent = Some( p );
			let c_node = self.node_mut( c );
			( c_node.dsep, c_node.isep ) = ( c_node.isep, c_node.dsep );
		}

		let mut p_type = SepType::NoSep;
		if self.node( g ).dsep == Some( p ) {
			p_type = SepType::Direct;
			self.node_mut( g ).dsep = Some( v );
		}
		else if self.node( g ).isep == Some( p ) {
			p_type = SepType::Indirect;
			self.node_mut( g ).isep = Some( v );
		}

		// v separates p and g
		self.node_mut( v ).dsep = self.node( v ).isep;
		self.node_mut( v ).isep = if p_type.is_sep() { Some( p ) } else { None };

		self.node_mut( p ).dsep = c;
		p_type
	}

	/// [rotate](Stt::rotate()) for a `v` known to be the indirect separator child of its parent.
	pub fn rotate_isep( &mut self, v : NodeIdx ) -> SepType {
		self.count_rotation();
		let p = self.node( v ).parent.unwrap();
		debug_assert!( self.node( p ).isep == Some( v ) );
		let g = self.node( p ).parent.unwrap(); // v is an indirect separator, so p is not the root
		let c = self.node( v ).dsep;

		self.node_mut( v ).parent = Some( g );
		self.node_mut( p ).parent = Some( v );

		if let Some( c ) = c {
			self.node_mut( c ).parent = Some( p );
			let c_node = self.node_mut( c );
			( c_node.dsep, c_node.isep ) = ( c_node.isep, c_node.dsep );
		}

		// The old dsep child of p (possibly none) becomes its isep child; v vacates the isep slot.
		let old_p_dsep = self.node( p ).dsep;
		self.node_mut( p ).isep = old_p_dsep;

		let mut p_type = SepType::NoSep;
		if self.node( g ).dsep == Some( p ) {
			p_type = SepType::Direct;
			self.node_mut( g ).dsep = Some( v );
		}
		else if self.node( g ).isep == Some( p ) {
			p_type = SepType::Indirect;
			self.node_mut( g ).isep = Some( v );
		}

		// p separates v and g
		self.node_mut( v ).dsep = Some( p );

		self.node_mut( p ).dsep = c;
		p_type
	}

	/// [rotate](Stt::rotate()) for a `v` known to be a non-separator with a non-separator parent.
	///
	/// Always returns [SepType::NoSep].
	pub fn rotate_nosep( &mut self, v : NodeIdx ) -> SepType {
		self.count_rotation();
		let p = self.node( v ).parent.unwrap();
		debug_assert!( !self.is_separator( v ) && !self.is_separator( p ) );
		debug_assert!( self.node( v ).isep.is_none() );
		let g = self.node( p ).parent;
		let c = self.node( v ).dsep;

		self.node_mut( v ).parent = g;
		self.node_mut( p ).parent = Some( v );

		if let Some( c ) = c {
			self.node_mut( c ).parent = Some( p );
			let c_node = self.node_mut( c );
			( c_node.dsep, c_node.isep ) = ( c_node.isep, c_node.dsep );
		}

		if g.is_some() { // p was not the root
			let old_p_dsep = self.node( p ).dsep;
			if old_p_dsep.is_some() {
				self.node_mut( p ).isep = old_p_dsep;
			}

			// p cannot occupy a slot of g, otherwise the rotation would be illegal.
			// p separates v and g.
			self.node_mut( v ).dsep = Some( p );
		}
		else { // p was the root
			self.node_mut( v ).dsep = None;
		}

		self.node_mut( p ).dsep = c;
		SepType::NoSep
	}

	/// Dispatches to the specialized rotation matching the known separator type of `v`.
	#[inline]
	pub fn rotate_hinted( &mut self, v : NodeIdx, v_type : SepType ) -> SepType {
		match v_type {
			SepType::Direct => self.rotate_dsep( v ),
			SepType::Indirect => self.rotate_isep( v ),
			SepType::NoSep => self.rotate_nosep( v )
		}
	}

	/// Moves `v` two levels up with a splay step, given the known separator types of `v` and its
	/// parent `p`.
	///
	/// `v` must have a grandparent. Afterwards, the separator type of `v` equals the type its old
	/// grandparent had on entry.
	pub(crate) fn splay_step_hinted( &mut self, v : NodeIdx, v_type : SepType, p : NodeIdx, p_type : SepType ) {
		if v_type == SepType::Direct { // T_v separates p and the grandparent; zig-zig
			self.rotate_dsep( v );
			self.rotate_hinted( v, p_type );
		}
		else { // p separates v and the grandparent; zig-zag
			self.rotate_hinted( p, p_type );
			self.rotate( v );
		}
	}

	/// Makes `parent` the parent of `child`.
	///
	/// `child` must be a root.
	pub fn attach( &mut self, child : NodeIdx, parent : NodeIdx ) {
		debug_assert!( self.node( child ).parent.is_none() );
		self.node_mut( child ).parent = Some( parent );
	}

	/// Removes `v` as a child from its parent.
	///
	/// `v` must have a parent and must not be a separator.
	pub fn detach( &mut self, v : NodeIdx ) {
		debug_assert!( self.node( v ).parent.is_some() );
		debug_assert!( !self.is_separator( v ) );
		self.node_mut( v ).parent = None;
	}

	/// The root of the search tree containing `v`.
	pub fn find_root( &self, v : NodeIdx ) -> NodeIdx {
		let mut x = v;
		while let Some( p ) = self.node( x ).parent {
			x = p;
		}
		x
	}

	/// Iterates over the indices of nodes in this forest.
	pub fn nodes( &self ) -> Map<Range<usize>, fn(usize) -> NodeIdx> {
		( 0..self.nodes.len() ).map( NodeIdx::new )
	}

	/// Iterates over each child-parent edge of the search trees.
	///
	/// These agree with the represented edges only if the forest is 1-cut; see
	/// [make_one_cut](Stt::make_one_cut()).
	pub fn edges( &self ) -> impl Iterator<Item = (NodeIdx, NodeIdx)> + '_ {
		self.nodes().filter_map( |v| self.parent( v ).map( |p| ( v, p ) ) )
	}

	/// Performs rotations until no node is a separator.
	///
	/// Afterwards the search trees are rootings of the represented trees, i.e. the search tree
	/// edges are exactly the represented edges.
	pub fn make_one_cut( &mut self ) {
		for v in self.nodes() {
			while self.is_separator( v ) {
				self.rotate( v );
			}
		}
	}

	/// Performs some sanity checks and returns `true` if they succeed.
	pub fn is_valid( &self ) -> bool {
		self.nodes().all( |v| {
			let n = self.node( v );
			( n.dsep.is_none() || n.dsep != n.isep )
				&& n.dsep.map_or( true, |c| self.node( c ).parent == Some( v ) )
				&& n.isep.map_or( true, |c| self.node( c ).parent == Some( v ) )
				&& ( n.parent.is_some() || ( n.dsep.is_none() && n.isep.is_none() ) )
		} )
	}

	fn write_subtree( &self, out : &mut Formatter<'_>, v : NodeIdx,
			child_map : &HashMap<NodeIdx, Vec<NodeIdx>>, indent : &str ) -> std::fmt::Result
	{
		out.write_str( indent )?;
		write!( out, "{}", v.index() )?;
		match self.sep_type( v ) {
			SepType::Direct => out.write_str( "d" )?,
			SepType::Indirect => out.write_str( "i" )?,
			SepType::NoSep => {}
		}
		out.write_str( "\n" )?;

		fn indent_map( c : char ) -> char {
			match c {
				'├' => '│',
				'└' => ' ',
				'─' => ' ',
				x => x
			}
		}
		let child_indent : String = indent.chars().map( indent_map ).collect();
		let empty = vec![];
		let mut child_it = child_map.get( &v ).unwrap_or( &empty ).iter().peekable();
		while let Some( c ) = child_it.next() {
			let indent_symbol = if child_it.peek().is_none() { "└─" } else { "├─" };
			self.write_subtree( out, *c, child_map, format!( "{}{}", child_indent, indent_symbol ).as_str() )?;
		}
		Ok( () )
	}
}

impl Display for Stt {
	/// Writes a human-readable rendering of the search trees, marking separator children with
	/// `d`/`i`.
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		let mut child_map : HashMap<NodeIdx, Vec<NodeIdx>> = HashMap::new();
		for v in self.nodes() {
			if let Some( p ) = self.parent( v ) {
				child_map.entry( p ).or_default().push( v );
			}
		}
		for v in self.nodes() {
			if self.parent( v ).is_none() {
				self.write_subtree( f, v, &child_map, "" )?;
			}
		}
		Ok( () )
	}
}


/// A policy deciding which rotations bring a node to the root of its search tree.
pub trait AccessPolicy {
	/// Performs rotations until `v` is the root of its search tree. Only affects nodes on the
	/// search path of `v`.
	fn access( t : &mut Stt, v : NodeIdx );
}


/// A [DynamicForest] engine combining an [Stt] with an [AccessPolicy].
///
/// All three structural operations follow the same protocol: access both endpoints, then perform
/// a single attach/detach (or a root comparison) at the top of the now-rearranged search tree.
#[derive(Clone)]
pub struct SttForest<TPolicy : AccessPolicy> {
	t : Stt,
	_policy : PhantomData<TPolicy>
}

impl<TPolicy : AccessPolicy> SttForest<TPolicy> {
	/// Grants read access to the underlying search trees.
	pub fn stt( &self ) -> &Stt {
		&self.t
	}
}

impl<TPolicy : AccessPolicy> Display for SttForest<TPolicy> {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		write!( f, "{}", self.t )
	}
}

impl<TPolicy : AccessPolicy> DynamicForest for SttForest<TPolicy> {
	fn new( num_vertices : usize ) -> Self {
		SttForest { t : Stt::new( num_vertices ), _policy : PhantomData }
	}

	fn num_vertices( &self ) -> usize {
		self.t.num_nodes()
	}

	fn link( &mut self, u : usize, v : usize ) -> Result<(), Error> {
		let ( u, v ) = check_edge_vertices( self.num_vertices(), u, v )?;
		TPolicy::access( &mut self.t, u );
		TPolicy::access( &mut self.t, v );
		// If u and v were in the same tree, the second access gave u a parent again.
		if self.t.parent( u ).is_some() {
			return Err( Error::PreconditionViolated( "cannot link two vertices in the same tree" ) );
		}
		self.t.attach( u, v );
		Ok( () )
	}

	fn cut( &mut self, u : usize, v : usize ) -> Result<(), Error> {
		let ( u, v ) = check_edge_vertices( self.num_vertices(), u, v )?;
		TPolicy::access( &mut self.t, u );
		TPolicy::access( &mut self.t, v );
		// The edge (u,v) exists iff u now hangs directly below the root v and no subtree of u
		// separates them.
		if self.t.parent( u ) != Some( v ) || self.t.dsep_child( u ).is_some() {
			return Err( Error::PreconditionViolated( "cannot cut an edge that is not in the forest" ) );
		}
		self.t.detach( u );
		Ok( () )
	}

	fn connected( &mut self, u : usize, v : usize ) -> Result<bool, Error> {
		let u = check_vertex( self.num_vertices(), u )?;
		let v = check_vertex( self.num_vertices(), v )?;
		if u == v {
			return Ok( true );
		}
		TPolicy::access( &mut self.t, u );
		TPolicy::access( &mut self.t, v );
		// v is now the root of its search tree, so u reaches v iff they share a tree.
		Ok( self.t.find_root( u ) == v )
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	/// Builds a path 0-1-2-...-(n-1) as a 1-cut tree rooted at n-1.
	fn path_stt( n : usize ) -> Stt {
		let mut t = Stt::new( n );
		for v in 0..n - 1 {
			t.attach( NodeIdx::new( v ), NodeIdx::new( v + 1 ) );
		}
		t
	}

	#[test]
	fn test_rotate_at_root_child() {
		let mut t = path_stt( 2 );
		let v = NodeIdx::new( 0 );
		assert!( t.can_rotate( v ) );
		assert_eq!( t.rotate( v ), SepType::NoSep );
		assert!( t.parent( v ).is_none() );
		assert_eq!( t.parent( NodeIdx::new( 1 ) ), Some( v ) );
		assert!( t.is_valid() );
	}

	#[test]
	fn test_rotate_creates_separator() {
		// Rotating 0 over 1 in the path 0-1-2 makes 1 the direct separator child of 0.
		let mut t = path_stt( 3 );
		let v = NodeIdx::new( 0 );
		t.rotate( v );
		assert_eq!( t.parent( v ), Some( NodeIdx::new( 2 ) ) );
		assert_eq!( t.dsep_child( v ), Some( NodeIdx::new( 1 ) ) );
		assert_eq!( t.sep_type( NodeIdx::new( 1 ) ), SepType::Direct );
		assert!( t.is_valid() );
	}

	#[test]
	fn test_rotate_returns_new_sep_type() {
		let mut t = path_stt( 4 );
		let v = NodeIdx::new( 1 );
		let reported = t.rotate( v );
		assert_eq!( reported, t.sep_type( v ) );
	}

	#[test]
	fn test_make_one_cut_restores_plain_rooting() {
		let mut t = path_stt( 5 );
		t.rotate( NodeIdx::new( 0 ) );
		t.rotate( NodeIdx::new( 0 ) );
		t.make_one_cut();
		assert!( t.nodes().all( |v| !t.is_separator( v ) ) );
		assert!( t.is_valid() );
	}

	#[test]
	fn test_root_has_no_separator_children() {
		let mut t = path_stt( 4 );
		for _ in 0..3 {
			t.rotate( NodeIdx::new( 0 ) );
		}
		assert!( t.parent( NodeIdx::new( 0 ) ).is_none() );
		assert!( t.dsep_child( NodeIdx::new( 0 ) ).is_none() );
		assert!( t.isep_child( NodeIdx::new( 0 ) ).is_none() );
	}

	fn check_policy_accesses_to_root<TPolicy : AccessPolicy>() {
		let mut t = path_stt( 9 );
		// Accessing in this order repeatedly restructures the whole search tree
		for v in [0, 8, 4, 2, 6, 4, 0, 8] {
			TPolicy::access( &mut t, NodeIdx::new( v ) );
			assert!( t.parent( NodeIdx::new( v ) ).is_none() );
			assert!( t.is_valid(), "access({v}) produced an invalid tree:\n{t}" );
		}
	}

	#[test]
	fn test_policies_access_to_root() {
		check_policy_accesses_to_root::<GreedySplay>();
		check_policy_accesses_to_root::<MoveToRoot>();
		check_policy_accesses_to_root::<LocalTwoPass>();
	}

	#[cfg( feature = "count_rotations" )]
	#[test]
	fn test_rotation_count_is_amortized_logarithmic() {
		const N : usize = 256;
		let mut f = GreedySplayForest::new( N );
		for v in 0..N - 1 {
			f.link( v, v + 1 ).unwrap();
		}
		for round in 0..10 {
			for v in 0..N {
				f.connected( v, ( v * 7 + round ) % N ).unwrap();
			}
		}
		let ops = ( N - 1 ) + 10 * N;
		let log_n = ( usize::BITS - ( N + 1 ).leading_zeros() ) as usize;
		let bound = ( 40 * ops * log_n ) as u64;
		assert!( f.stt().num_rotations() < bound,
			"{} rotations for {} operations", f.stt().num_rotations(), ops );
	}

	#[test]
	fn test_forest_link_cut_connected() {
		let mut f = GreedySplayForest::new( 4 );
		f.link( 0, 1 ).unwrap();
		f.link( 2, 1 ).unwrap();
		assert_eq!( f.connected( 0, 2 ), Ok( true ) );
		assert_eq!( f.connected( 0, 3 ), Ok( false ) );
		assert!( f.link( 2, 0 ).is_err() );
		f.cut( 1, 2 ).unwrap();
		assert_eq!( f.connected( 0, 2 ), Ok( false ) );
		assert!( f.cut( 1, 2 ).is_err() );
	}
}
