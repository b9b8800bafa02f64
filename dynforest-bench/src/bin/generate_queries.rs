//! Generates random valid connectivity workload files.

use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use dynforest::verify;
use dynforest::workload::Query;

#[derive(Parser)]
#[command(name = "generate_queries")]
struct Cli {
	/// Number of vertices in the underlying graph
	#[arg(short, long)]
	num_vertices : usize,

	/// Number of queries
	#[arg(short = 'q', long)]
	num_queries : usize,

	/// Seed for the random query generator
	#[arg(short, long)]
	seed : u64,

	/// Probability of generating a connectivity query (instead of a cut) when sampling two
	/// vertices in the same tree
	#[arg(short = 'p', long, default_value_t = 0.5)]
	query_prob : f64,

	/// Write the generated queries to the given file instead of stdout
	#[arg(short, long)]
	output_file : Option<PathBuf>
}

fn print_query_type_dist( queries : &[Query] ) {
	let mut links = 0;
	let mut cuts = 0;
	let mut connectivity = 0;

	for query in queries {
		match query {
			Query::Link( _, _ ) => links += 1,
			Query::Cut( _, _ ) => cuts += 1,
			Query::Connected( _, _ ) => connectivity += 1,
			_ => {}
		}
	}

	println!( "Generated {links}x Link, {cuts}x Cut, {connectivity}x Connected" );
}

fn main() {
	let cli = Cli::parse();

	let verbose = cli.output_file.is_some();
	if verbose {
		println!( "Generating {} queries on {} vertices...", cli.num_queries, cli.num_vertices );
	}

	let mut rng = StdRng::seed_from_u64( cli.seed );
	let workload = verify::random_connectivity_workload(
		cli.num_vertices, cli.num_queries, cli.query_prob, &mut rng );

	if verbose {
		print_query_type_dist( &workload.queries );
	}

	let write_result = match cli.output_file {
		Some( path ) => {
			match File::create( &path ) {
				Ok( mut fp ) => workload.write( &mut fp ),
				Err( e ) => {
					eprintln!( "cannot create '{}': {}", path.display(), e );
					process::exit( 2 );
				}
			}
		}
		None => workload.write( &mut stdout() )
	};

	if let Err( e ) = write_result {
		eprintln!( "write error: {}", e );
		process::exit( 2 );
	}
}
