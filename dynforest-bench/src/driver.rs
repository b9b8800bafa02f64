/*!
The shared command line driver.

Every engine binary accepts the same grammar:

```text
<binary> bench [--json] <repeat> <query-file>
<binary> compute <query-file>
```

`bench` executes the workload `repeat` times on a freshly constructed forest per run and reports
timings, either human-readable or as a single JSON object. `compute` executes the workload once
and prints one line per answerable query.

Exit codes: 0 on success, 1 on a usage error, 2 on a parse or I/O failure, 3 on an execution
failure. Errors are reported once on the standard error stream.
*/

use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use clap::error::ErrorKind;

use dynforest::{DynamicForest, Error, EversibleRootedDynamicForest};
use dynforest::link_cut::EmptyLinkCutForest;
use dynforest::naive::EmptyNaiveForest;
use dynforest::stt::{GreedySplayForest, LocalTwoPassForest, MoveToRootForest};
use dynforest::workload::{Query, Workload};


/// The engine name reported in benchmark output.
pub trait EngineName {
	/// A short, stable name for this engine.
	fn name() -> &'static str;
}

impl EngineName for GreedySplayForest {
	fn name() -> &'static str {
		"greedy-splay"
	}
}

impl EngineName for MoveToRootForest {
	fn name() -> &'static str {
		"move-to-root"
	}
}

impl EngineName for LocalTwoPassForest {
	fn name() -> &'static str {
		"local-two-pass"
	}
}

impl EngineName for EmptyLinkCutForest {
	fn name() -> &'static str {
		"link-cut"
	}
}

impl EngineName for EmptyNaiveForest {
	fn name() -> &'static str {
		"naive"
	}
}


/// The answer of a single observational query.
pub enum Answer {
	/// A connectivity answer.
	Connected( bool ),

	/// A vertex answer (lowest common ancestor), or `-` if there is none.
	Vertex( Option<usize> )
}

impl Display for Answer {
	fn fmt( &self, f : &mut Formatter<'_> ) -> std::fmt::Result {
		match self {
			Answer::Connected( true ) => write!( f, "1" ),
			Answer::Connected( false ) => write!( f, "0" ),
			Answer::Vertex( Some( v ) ) => write!( f, "{}", v ),
			Answer::Vertex( None ) => write!( f, "-" )
		}
	}
}


/// An engine adapter executing parsed workload queries.
pub trait QueryRunner {
	/// Creates a fresh forest on `num_vertices` vertices.
	fn new( num_vertices : usize ) -> Self;

	/// The engine name reported in benchmark output.
	fn name() -> &'static str;

	/// Executes one query, returning its answer if it has one.
	fn run( &mut self, query : &Query ) -> Result<Option<Answer>, Error>;
}


/// Adapter for connectivity-only engines.
///
/// Rooted operations (`d u`, `a u v`) are rejected with a precondition violation.
pub struct ConnRunner<TForest : DynamicForest + EngineName> {
	f : TForest
}

impl<TForest : DynamicForest + EngineName> QueryRunner for ConnRunner<TForest> {
	fn new( num_vertices : usize ) -> Self {
		ConnRunner { f : TForest::new( num_vertices ) }
	}

	fn name() -> &'static str {
		TForest::name()
	}

	fn run( &mut self, query : &Query ) -> Result<Option<Answer>, Error> {
		match *query {
			Query::Link( u, v ) => {
				self.f.link( u, v )?;
				Ok( None )
			}
			Query::Cut( u, v ) => {
				self.f.cut( u, v )?;
				Ok( None )
			}
			Query::Connected( u, v ) => Ok( Some( Answer::Connected( self.f.connected( u, v )? ) ) ),
			Query::CutFromParent( _ ) | Query::LowestCommonAncestor( _, _ ) =>
				Err( Error::PreconditionViolated( "this engine does not support rooted operations" ) )
		}
	}
}


/// Adapter for the dynamic-tree engine; executes all five operation kinds.
pub struct RootedRunner<TForest : DynamicForest + EversibleRootedDynamicForest + EngineName> {
	f : TForest
}

impl<TForest : DynamicForest + EversibleRootedDynamicForest + EngineName> QueryRunner for RootedRunner<TForest> {
	fn new( num_vertices : usize ) -> Self {
		RootedRunner { f : DynamicForest::new( num_vertices ) }
	}

	fn name() -> &'static str {
		TForest::name()
	}

	fn run( &mut self, query : &Query ) -> Result<Option<Answer>, Error> {
		match *query {
			Query::Link( u, v ) => {
				DynamicForest::link( &mut self.f, u, v )?;
				Ok( None )
			}
			Query::Cut( u, v ) => {
				DynamicForest::cut( &mut self.f, u, v )?;
				Ok( None )
			}
			Query::Connected( u, v ) => Ok( Some( Answer::Connected( self.f.connected( u, v )? ) ) ),
			Query::CutFromParent( v ) => {
				self.f.cut_from_parent( v )?;
				Ok( None )
			}
			Query::LowestCommonAncestor( u, v ) =>
				Ok( Some( Answer::Vertex( self.f.lowest_common_ancestor( u, v )? ) ) )
		}
	}
}


#[derive(Parser)]
struct Cli {
	#[command(subcommand)]
	command : DriverCommand
}

#[derive(Subcommand)]
enum DriverCommand {
	/// Time repeated executions of a query file
	Bench {
		/// Emit the result as a single JSON object
		#[arg(long)]
		json : bool,

		/// How often to execute the whole workload
		repeat : usize,

		/// The query file to execute
		query_file : PathBuf
	},

	/// Execute a query file once, printing each answer
	Compute {
		/// The query file to execute
		query_file : PathBuf
	}
}


/// Parses the command line and runs the given engine. Returns the process exit status.
pub fn run<TRunner : QueryRunner>() -> i32 {
	let cli = match Cli::try_parse() {
		Ok( cli ) => cli,
		Err( e ) if e.kind() == ErrorKind::DisplayHelp || e.kind() == ErrorKind::DisplayVersion => {
			print!( "{e}" );
			return 0;
		}
		Err( e ) => {
			let err = Error::Usage( e.to_string() );
			eprintln!( "{err}" );
			return err.exit_code();
		}
	};

	let result = match cli.command {
		DriverCommand::Bench { json, repeat, query_file } => bench::<TRunner>( json, repeat, &query_file ),
		DriverCommand::Compute { query_file } => compute::<TRunner>( &query_file )
	};

	match result {
		Ok( () ) => 0,
		Err( e ) => {
			eprintln!( "{e}" );
			e.exit_code()
		}
	}
}

fn bench<TRunner : QueryRunner>( json_output : bool, repeat : usize, path : &Path ) -> Result<(), Error> {
	if repeat == 0 {
		return Err( Error::Usage( "repeat must be positive".to_string() ) );
	}
	let workload = Workload::load( path )?;

	if !json_output {
		println!( "Executing {} queries on {} vertices {} times.",
			workload.queries.len(), workload.num_vertices, repeat );
	}

	let start = Instant::now();
	// Accumulated so the connectivity answers cannot be optimized away
	let mut yes_answers : usize = 0;
	for _ in 0..repeat {
		let mut f = TRunner::new( workload.num_vertices );
		for query in &workload.queries {
			if let Some( Answer::Connected( true ) ) = f.run( query )? {
				yes_answers += 1;
			}
		}
	}
	let elapsed = start.elapsed();

	if json_output {
		println!( "{}", json::stringify( json::object!{
			num_vertices : workload.num_vertices,
			num_queries : workload.queries.len(),
			name : TRunner::name(),
			time_ns : u64::try_from( elapsed.as_nanos() / ( repeat as u128 ) )
				.expect( "duration too long" )
		} ) );
	}
	else {
		println!( "Total yes-answers: {}", yes_answers / repeat );
		let micros = elapsed.as_micros();
		println!( "{} us total", micros );
		println!( "{} us/run", micros / ( repeat as u128 ) );
		println!( "{:.3} us/query",
			micros as f64 / ( repeat as f64 ) / ( workload.queries.len() as f64 ) );
	}
	Ok( () )
}

fn compute<TRunner : QueryRunner>( path : &Path ) -> Result<(), Error> {
	let workload = Workload::load( path )?;
	let mut f = TRunner::new( workload.num_vertices );
	for query in &workload.queries {
		if let Some( answer ) = f.run( query )? {
			println!( "{answer}" );
		}
	}
	Ok( () )
}
