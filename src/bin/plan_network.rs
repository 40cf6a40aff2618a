use std::process;
use std::time::Instant;

use clap::{value_parser, Arg, ArgAction, Command};

use cablenet::graph::{AdjacencyList, IndexT, WeightTable};
use cablenet::mst::{minimum_spanning_tree, minimum_spanning_tree_heap, verify_spanning_tree};
use cablenet::report::{render_error, render_plan, render_routes, Labels};
use cablenet::util::stations::{charging_network, charging_network_without, STATION_NAMES};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if std::env::var("CABLENET_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("CABLENET_LOG")
            .write_style("CABLENET_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let matches = Command::new("plan_network")
        .version("0.1.0")
        .about("Plans the cheapest cable network connecting every charging station")
        .arg(
            Arg::new("routes")
                .long("routes")
                .short('r')
                .action(ArgAction::SetTrue)
                .help("List every candidate cable route before planning"),
        )
        .arg(
            Arg::new("selector")
                .long("selector")
                .short('s')
                .value_parser(["scan", "heap"])
                .default_value("scan")
                .help("How the next station is selected"),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .action(ArgAction::SetTrue)
                .help("Independently check the plan against the network"),
        )
        .arg(
            Arg::new("isolate")
                .long("isolate")
                .value_name("INDEX")
                .value_parser(value_parser!(IndexT))
                .help("Leave out every route touching this station"),
        )
        .get_matches();

    let labels = Labels::new(STATION_NAMES);
    let table: WeightTable = match matches.get_one::<IndexT>("isolate") {
        Some(&station) => {
            log::info!("isolating station {} ({})", station, labels.get(station));
            charging_network_without(station)?
        }
        None => charging_network()?,
    };
    log::debug!(
        "network has {} stations and {} routes",
        table.n(),
        table.edge_count()
    );

    if matches.get_flag("routes") {
        println!("{}", render_routes(&table, &labels));
    }

    let selector = matches
        .get_one::<String>("selector")
        .map(String::as_str)
        .unwrap_or("scan");

    let start = Instant::now();
    let result = match selector {
        "heap" => {
            let list = AdjacencyList::from(&table);
            log::debug!(
                "adjacency list holds {} directed entries, max degree {}",
                list.total_edges(),
                list.max_degree()
            );
            minimum_spanning_tree_heap(&list)
        }
        _ => minimum_spanning_tree(&table),
    };
    log::debug!("{} selector finished in {:?}", selector, start.elapsed());

    let tree = match result {
        Ok(tree) => tree,
        Err(e) => {
            eprint!("{}", render_error(&e, &labels));
            process::exit(1);
        }
    };

    print!("{}", render_plan(&tree, &labels));

    if matches.get_flag("verify") {
        let defects = verify_spanning_tree(&table, &tree);
        if defects.is_empty() {
            println!("plan verified: {} routes span all stations", tree.len());
        } else {
            for defect in &defects {
                eprintln!("defect: {:?}", defect);
            }
            process::exit(2);
        }
    }

    Ok(())
}
