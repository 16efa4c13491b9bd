//! sqlbrick CLI - replays the walkthrough session the README example is
//! generated from

use clap::{Parser, Subcommand};
use sqlbrick::{build_join, PreambleMode, Query};

/// An incremental SQL statement builder
#[derive(Parser)]
#[command(name = "sqlbrick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the annotated walkthrough session and print each step
    Demo {
        /// Render each step with the multi-line formatter
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { pretty } => run_demo(pretty),
    }
}

/// Build a query step by step, printing the rendering after each step
fn run_demo(pretty: bool) -> miette::Result<()> {
    let mut query = Query::new();

    query.from.add("ex_db.dbo.ex_table tbl");
    show("start from a source table", &query, pretty);

    query.select.add(["col1", "col2", "col3"]);
    query.select.add("col4");
    show("select columns, in batches or one at a time", &query, pretty);

    query.where_clause.add("col1 = 1");
    query.where_clause.add_or("col2 IS NULL");
    show("filter with AND/OR connectors", &query, pretty);

    query.select.clear();
    query.select.add("col1");
    query.select[0] = String::from("col2");
    show("clear a clause or replace a fragment in place", &query, pretty);

    query.set_join_type("LEFT");
    query.join.add(build_join(
        "ex_db.dbo.new_tbl nt",
        &["tbl.id", "nt.id", "tbl.city", "nt.city"],
    )?);
    query.set_join_type("");
    query.select.add("nt.id");
    show("join through the condition helper", &query, pretty);

    query.set_top(Some(10))?;
    query.order_by.add(["col2", "nt.id"]);
    show("cap and order the result", &query, pretty);

    query.preamble.set_table("report_db.dbo.summary", PreambleMode::Insert);
    show("write the result into a table", &query, pretty);

    Ok(())
}

fn show(caption: &str, query: &Query, pretty: bool) {
    println!("-- {caption}");
    if pretty {
        println!("{query}");
    } else {
        println!("{}", query.statement());
    }
    println!();
}
