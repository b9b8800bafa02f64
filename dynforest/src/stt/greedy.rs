//! The greedy splay access policy.

use crate::NodeIdx;
use crate::stt::{AccessPolicy, SepType, Stt};

/**
A greedy splay policy.

Brings a node `v` to the root by repeatedly performing the deepest legal splay step on the chain
`v`, parent, grandparent (one of the three is always legal). The separator types driving each
decision are computed once and handed down to the specialized rotations.

Expected amortized O(log n) rotations per access over random workloads.
*/
#[derive(Clone)]
pub struct GreedySplay;

impl AccessPolicy for GreedySplay {
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
						// Cannot splay at v; g is a separator and p is not.
						let ggg = t.parent( gg ).unwrap(); // g is a separator, so gg is not the root
						let gg_type = t.sep_type_hint( gg, ggg );
						if gg_type == SepType::NoSep {
							// Can splay at p
							t.splay_step_hinted( p, p_type, g, g_type );
						}
						else {
							// Cannot splay at p; splaying at g must be allowed
							t.splay_step_hinted( g, g_type, gg, gg_type );
						}
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
