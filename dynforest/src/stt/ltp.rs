//! The local two-pass splay access policy.

use crate::NodeIdx;
use crate::stt::{AccessPolicy, SepType, Stt};

/**
A local two-pass splay policy.

Like [GreedySplay](crate::stt::GreedySplay), but restricts lookahead to the local four-node
chain. When neither `v` nor its parent can move, the branching node (the deepest separator
above a non-separator) is rotated out of the way by a helper loop instead of inspecting nodes
further up the search path.
*/
#[derive(Clone)]
pub struct LocalTwoPass;

/// Rotates the branching node `v` upward until it is no longer a separator.
///
/// Splay steps are used while the parent is also a separator; the final displacement is a single
/// rotation. Separator types are derived once per level and passed down.
fn move_branching_node( t : &mut Stt, v : NodeIdx ) {
	while let Some( p ) = t.parent( v ) {
		let v_type = t.sep_type_hint( v, p );
		if v_type == SepType::NoSep {
			return;
		}
		let g = t.parent( p ).unwrap(); // v is a separator, so p is not the root
		let p_type = t.sep_type_hint( p, g );
		if p_type.is_sep() {
			// p is a separator, so a splay step at v is legal
			t.splay_step_hinted( v, v_type, p, p_type );
		}
		else {
			t.rotate_hinted( v, v_type );
			return; // v is no longer a separator
		}
	}
}

impl AccessPolicy for LocalTwoPass {
	fn access( t : &mut Stt, v : NodeIdx ) {
		while let Some( p ) = t.parent( v ) {
			if let Some( g ) = t.parent( p ) {
				let v_type = t.sep_type_hint( v, p );
				let p_type = t.sep_type_hint( p, g );
				if v_type.is_sep() && p_type.is_sep() {
					// Can splay at v regardless of g's type
					t.splay_step_hinted( v, v_type, p, p_type );
				}
				else if let Some( gg ) = t.parent( g ) {
					let g_type = t.sep_type_hint( g, gg );
					if g_type == SepType::NoSep {
						// Can splay at v
						t.splay_step_hinted( v, v_type, p, p_type );
					}
					else if p_type.is_sep() {
						// g and p are separators, so we can splay at p
						t.splay_step_hinted( p, p_type, g, g_type );
					}
					else {
						// g is a branching node
						move_branching_node( t, g );
					}
				}
				else {
					// g is the root; splaying at v must be allowed
					t.splay_step_hinted( v, v_type, p, p_type );
				}
			}
			else {
				// p is the root
				t.rotate( v );
			}
		}
	}
}
