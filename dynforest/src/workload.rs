/*!
The textual workload model and its parser.

A workload file is line-oriented UTF-8. Exactly one header line appears before any operation:

```text
con N        (connectivity workloads)
queries N    (general dynamic-tree workloads)
lca N        (lowest-common-ancestor workloads)
```

where `N >= 0` is the vertex count; generators append the query count as an ignored second
integer. Operation lines are `i u v` (link), `d u v` (cut), `d u` (cut from parent), `a u v`
(lowest common ancestor) and `p u v` (connectivity query), with all vertices below `N`. Blank
lines are skipped and remaining lines starting with `c` are comments. Anything else is a parse
error carrying the offending line; so are a repeated header and an operation before the header.
*/

use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::Error;


/// A single operation of a workload.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Query {
	/// Add the edge `(u,v)`.
	Link( usize, usize ),

	/// Remove the edge `(u,v)`.
	Cut( usize, usize ),

	/// Remove the edge between `v` and its parent (rooted engines only).
	CutFromParent( usize ),

	/// Report the lowest common ancestor of `u` and `v` (rooted engines only).
	LowestCommonAncestor( usize, usize ),

	/// Report whether `u` and `v` are connected.
	Connected( usize, usize )
}

/// The workload family announced by the header line.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WorkloadKind {
	/// `con` — connectivity workloads.
	Connectivity,

	/// `queries` — general dynamic-tree workloads.
	Queries,

	/// `lca` — lowest-common-ancestor workloads.
	Lca
}

impl WorkloadKind {
	fn from_header_word( word : &str ) -> Option<WorkloadKind> {
		match word {
			"con" => Some( WorkloadKind::Connectivity ),
			"queries" => Some( WorkloadKind::Queries ),
			"lca" => Some( WorkloadKind::Lca ),
			_ => None
		}
	}

	fn header_word( &self ) -> &'static str {
		match self {
			WorkloadKind::Connectivity => "con",
			WorkloadKind::Queries => "queries",
			WorkloadKind::Lca => "lca"
		}
	}
}


/// A parsed workload: a vertex count and a sequence of operations.
#[derive(Clone, Debug)]
pub struct Workload {
	/// The workload family of the header.
	pub kind : WorkloadKind,

	/// The vertex count `N`; all operation arguments are below `N`.
	pub num_vertices : usize,

	/// The operations, in file order.
	pub queries : Vec<Query>
}

fn parse_error( line_number : usize, line : &str ) -> Error {
	Error::Parse { line : line_number, content : line.to_string() }
}

impl Workload {
	/// Parses a workload from a reader.
	pub fn parse( reader : impl BufRead ) -> Result<Workload, Error> {
		let mut header : Option<(WorkloadKind, usize)> = None;
		let mut queries : Vec<Query> = vec![];
		let mut line_number = 0;

		for line in reader.lines() {
			let line = line?;
			line_number += 1;

			let tokens : Vec<&str> = line.split_whitespace().collect();
			if tokens.is_empty() {
				continue;
			}

			// Header line: "<kind> N", with an optional ignored query count.
			if let Some( kind ) = WorkloadKind::from_header_word( tokens[0] ) {
				if ( tokens.len() == 2 || tokens.len() == 3 )
						&& tokens[1..].iter().all( |t| t.parse::<usize>().is_ok() ) {
					if header.is_some() {
						return Err( parse_error( line_number, &line ) );
					}
					header = Some( ( kind, tokens[1].parse().unwrap() ) );
					continue;
				}
				// A malformed header falls through; it may still be a comment.
			}

			if line.starts_with( 'c' ) {
				continue;
			}

			let ( _, num_vertices ) = header.ok_or_else( || parse_error( line_number, &line ) )?;

			let vertex = |t : &str| -> Result<usize, Error> {
				match t.parse::<usize>() {
					Ok( v ) if v < num_vertices => Ok( v ),
					_ => Err( parse_error( line_number, &line ) )
				}
			};

			let query = match ( tokens[0], tokens.len() ) {
				( "i", 3 ) => Query::Link( vertex( tokens[1] )?, vertex( tokens[2] )? ),
				( "d", 3 ) => Query::Cut( vertex( tokens[1] )?, vertex( tokens[2] )? ),
				( "d", 2 ) => Query::CutFromParent( vertex( tokens[1] )? ),
				( "a", 3 ) => Query::LowestCommonAncestor( vertex( tokens[1] )?, vertex( tokens[2] )? ),
				( "p", 3 ) => Query::Connected( vertex( tokens[1] )?, vertex( tokens[2] )? ),
				_ => return Err( parse_error( line_number, &line ) )
			};
			queries.push( query );
		}

		match header {
			Some( ( kind, num_vertices ) ) => Ok( Workload { kind, num_vertices, queries } ),
			None => Err( parse_error( line_number + 1, "missing header" ) )
		}
	}

	/// Opens and parses a workload file.
	pub fn load( path : impl AsRef<Path> ) -> Result<Workload, Error> {
		let file = File::open( path )?;
		Workload::parse( BufReader::new( file ) )
	}

	/// Writes this workload in the file format parsed by [parse](Workload::parse()).
	pub fn write( &self, out : &mut impl Write ) -> io::Result<()> {
		writeln!( out, "{} {} {}", self.kind.header_word(), self.num_vertices, self.queries.len() )?;
		for query in &self.queries {
			match query {
				Query::Link( u, v ) => writeln!( out, "i {} {}", u, v )?,
				Query::Cut( u, v ) => writeln!( out, "d {} {}", u, v )?,
				Query::CutFromParent( v ) => writeln!( out, "d {}", v )?,
				Query::LowestCommonAncestor( u, v ) => writeln!( out, "a {} {}", u, v )?,
				Query::Connected( u, v ) => writeln!( out, "p {} {}", u, v )?
			}
		}
		Ok( () )
	}
}


#[cfg(test)]
mod tests {
	use super::*;
	use crate::Error;

	fn parse_str( s : &str ) -> Result<Workload, Error> {
		Workload::parse( s.as_bytes() )
	}

	#[test]
	fn test_parse_connectivity_file() {
		let w = parse_str( "c a comment before the header\ncon 5 4\ni 0 1\ni 1 2\np 0 2\nd 0 1\n" ).unwrap();
		assert_eq!( w.kind, WorkloadKind::Connectivity );
		assert_eq!( w.num_vertices, 5 );
		assert_eq!( w.queries, vec![
			Query::Link( 0, 1 ),
			Query::Link( 1, 2 ),
			Query::Connected( 0, 2 ),
			Query::Cut( 0, 1 )
		] );
	}

	#[test]
	fn test_parse_header_without_query_count() {
		let w = parse_str( "lca 3\ni 0 1\nd 1\na 0 1\n" ).unwrap();
		assert_eq!( w.kind, WorkloadKind::Lca );
		assert_eq!( w.num_vertices, 3 );
		assert_eq!( w.queries, vec![
			Query::Link( 0, 1 ),
			Query::CutFromParent( 1 ),
			Query::LowestCommonAncestor( 0, 1 )
		] );
	}

	#[test]
	fn test_blank_lines_and_comments() {
		let w = parse_str( "queries 2 1\n\nc ignore me\np 0 1\n\n" ).unwrap();
		assert_eq!( w.queries, vec![Query::Connected( 0, 1 )] );
	}

	#[test]
	fn test_cut_arity_dispatch() {
		let w = parse_str( "queries 4\nd 1 2\nd 3\n" ).unwrap();
		assert_eq!( w.queries, vec![Query::Cut( 1, 2 ), Query::CutFromParent( 3 )] );
	}

	#[test]
	fn test_repeated_header_is_an_error() {
		let err = parse_str( "con 3\ncon 3\n" ).unwrap_err();
		assert_eq!( err, Error::Parse { line : 2, content : "con 3".to_string() } );
	}

	#[test]
	fn test_operation_before_header_is_an_error() {
		let err = parse_str( "i 0 1\ncon 3\n" ).unwrap_err();
		assert_eq!( err, Error::Parse { line : 1, content : "i 0 1".to_string() } );
	}

	#[test]
	fn test_missing_header_is_an_error() {
		assert!( parse_str( "" ).is_err() );
		assert!( parse_str( "c only comments\n" ).is_err() );
	}

	#[test]
	fn test_garbage_line_is_an_error() {
		let err = parse_str( "con 3\nx 0 1\n" ).unwrap_err();
		assert_eq!( err, Error::Parse { line : 2, content : "x 0 1".to_string() } );
	}

	#[test]
	fn test_out_of_range_vertex_is_an_error() {
		let err = parse_str( "con 3\ni 0 3\n" ).unwrap_err();
		assert_eq!( err, Error::Parse { line : 2, content : "i 0 3".to_string() } );
	}

	#[test]
	fn test_write_then_parse_round_trip() {
		let w = Workload {
			kind : WorkloadKind::Connectivity,
			num_vertices : 4,
			queries : vec![Query::Link( 0, 1 ), Query::Connected( 0, 1 ), Query::Cut( 0, 1 )]
		};
		let mut buf : Vec<u8> = vec![];
		w.write( &mut buf ).unwrap();
		let reparsed = Workload::parse( buf.as_slice() ).unwrap();
		assert_eq!( reparsed.num_vertices, 4 );
		assert_eq!( reparsed.queries, w.queries );
	}
}
