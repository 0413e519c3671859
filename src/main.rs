use clap::{crate_authors, crate_description, crate_name, crate_version, App, Arg, ArgMatches};
use gaston::{
    fragment::FragmentKind,
    front_end::{read_file, write_file, GraphDatabase},
    search::MiningResult,
    task::{MinSupport, Task},
};
use itertools::Itertools;
use std::error::Error;

fn print_summary(db: &GraphDatabase, min_frequency: usize, result: &MiningResult) {
    println!("Minimum frequency: {}", min_frequency);
    println!("{}", db.info());
    println!();
    let counts = result.kind_counts();
    for kind in FragmentKind::LEVELS {
        println!("{}: {}", kind, counts.get(&kind).copied().unwrap_or(0));
    }
    println!();
    let labels = db.labels();
    for (signature, frequent) in result {
        println!(
            "{} frequency: {}",
            signature
                .as_slice()
                .iter()
                .map(|&label| labels.render(label))
                .join(" "),
            frequent.frequency()
        );
    }
}

fn handle_mine(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let min_support: MinSupport = matches.value_of("MIN_SUPPORT").unwrap().parse()?;
    let db = read_file(matches.value_of("INPUT").unwrap())?;
    let task = Task::new(db.graphs(), min_support)
        .allow_cycles(!matches.is_present("no-cycles"))
        .allow_trees(!matches.is_present("no-trees"));
    let result = task.run();
    print_summary(&db, task.min_frequency(), &result);
    if let Some(output) = matches.value_of("output") {
        let graphs: Vec<_> = result
            .iter()
            .enumerate()
            .map(|(i, (_, frequent))| frequent.subgraph().to_labeled_graph(i as i64))
            .collect();
        write_file(output, &graphs, db.labels())?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let matches = App::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .arg(
            Arg::with_name("MIN_SUPPORT")
                .help("Minimum support: an absolute count, or a fraction in (0, 1]")
                .required(true),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Line-graph database file")
                .required(true),
        )
        .arg(
            Arg::with_name("output")
                .help("Writes the frequent subgraphs to this file")
                .short("o")
                .long("output")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("no-cycles")
                .help("Skips cycle mining")
                .short("c")
                .long("no-cycles")
                .takes_value(false),
        )
        .arg(
            Arg::with_name("no-trees")
                .help("Skips tree mining")
                .short("t")
                .long("no-trees")
                .takes_value(false),
        )
        .get_matches();
    handle_mine(&matches)
}
