//! The move-to-root access policy.

use crate::NodeIdx;
use crate::stt::{AccessPolicy, SepType, Stt};

/**
A simple move-to-root policy.

Rotates `v` directly to the root. Whenever `v` is not a legal rotation target (`v` is a
non-separator below a separator parent), the parent is first rotated upward until it stops being
a separator. The separator type of `v` is carried across iterations via the rotation return
values, so it is never re-derived from the slots.
*/
#[derive(Clone)]
pub struct MoveToRoot;

impl AccessPolicy for MoveToRoot {
	fn access( t : &mut Stt, v : NodeIdx ) {
		let mut v_type = t.sep_type( v );
		while let Some( p ) = t.parent( v ) {
			if v_type == SepType::NoSep {
				// Clear the separators above v; rotating p upward cannot make v a separator.
				let mut p_type = t.sep_type( p );
				while p_type.is_sep() {
					p_type = t.rotate_hinted( p, p_type );
				}
				debug_assert!( !t.is_separator( p ) );
				v_type = t.rotate_nosep( v );
			}
			else {
				v_type = t.rotate_hinted( v, v_type );
			}
		}
	}
}
