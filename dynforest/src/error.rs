//! The error type shared by the library and the query drivers.

use std::fmt::{Display, Formatter};
use std::io;

/// An error surfaced by a dynamic forest operation, the workload parser, or a driver.
///
/// Library functions never print; they return the error. The binaries report each error once on
/// the standard error stream and terminate with [exit_code](Error::exit_code()).
#[derive(Debug)]
pub enum Error {
	/// A structural operation was called with arguments violating its precondition: linking two
	/// vertices of the same tree, cutting a non-edge, an out-of-range vertex index, or a
	/// rooted-forest query sent to a connectivity-only engine.
	PreconditionViolated( &'static str ),

	/// A workload file does not conform to the query file format. Carries the 1-based line number
	/// and the offending line.
	Parse {
		/// 1-based number of the offending line.
		line : usize,
		/// The offending line, verbatim.
		content : String
	},

	/// A workload file could not be opened or read.
	Io( io::Error ),

	/// A driver invocation does not match the command line grammar.
	Usage( String )
}

impl Error {
	/// The process exit status a driver reports for this error.
	///
	/// Usage errors map to 1, parse and I/O failures to 2, execution failures to 3.
	pub fn exit_code( &self ) -> i32 {
		match self {
			Error::Usage( _ ) => 1,
			Error::Parse { .. } => 2,
			Error::Io( _ ) => 2,
			Error::PreconditionViolated( _ ) => 3
		}
	}
}

impl Display for Error {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		match self {
			Error::PreconditionViolated( msg ) => write!( f, "precondition violated: {}", msg ),
			Error::Parse { line, content } => write!( f, "cannot parse line {}: '{}'", line, content ),
			Error::Io( err ) => write!( f, "{}", err ),
			Error::Usage( msg ) => write!( f, "{}", msg )
		}
	}
}

impl std::error::Error for Error {
	fn source( &self ) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io( err ) => Some( err ),
			_ => None
		}
	}
}

impl From<io::Error> for Error {
	fn from( err : io::Error ) -> Error {
		Error::Io( err )
	}
}

impl PartialEq for Error {
	fn eq( &self, other : &Self ) -> bool {
		match ( self, other ) {
			( Error::PreconditionViolated( a ), Error::PreconditionViolated( b ) ) => a == b,
			( Error::Parse { line : l1, content : c1 }, Error::Parse { line : l2, content : c2 } )
				=> l1 == l2 && c1 == c2,
			( Error::Usage( a ), Error::Usage( b ) ) => a == b,
			_ => false
		}
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_exit_codes() {
		assert_eq!( Error::Usage( "bad".to_string() ).exit_code(), 1 );
		assert_eq!( Error::Parse { line : 3, content : "x".to_string() }.exit_code(), 2 );
		assert_eq!( Error::Io( io::Error::new( io::ErrorKind::NotFound, "gone" ) ).exit_code(), 2 );
		assert_eq!( Error::PreconditionViolated( "nope" ).exit_code(), 3 );
	}

	#[test]
	fn test_display() {
		let e = Error::Parse { line : 7, content : "x 1 2".to_string() };
		assert_eq!( format!( "{}", e ), "cannot parse line 7: 'x 1 2'" );
	}
}
