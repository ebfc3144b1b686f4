use crate::cli::commands::{Cli, Commands, ListArgs};
use crate::cli::output::{self, BoardJson};
use crate::io::config_io::{discover_config, read_config};
use crate::model::board::Board;
use crate::model::column::Column;
use crate::model::task::Priority;
use crate::ops::check::check_board;

/// Load the board for a CLI command: config file if one resolves, sample
/// board otherwise.
fn load_board(config: Option<&str>) -> Result<Board, Box<dyn std::error::Error>> {
    match discover_config(config) {
        Some(path) => {
            let (config, _doc) = read_config(&path)?;
            Ok(Board::from_config(&config))
        }
        None => Ok(Board::sample()),
    }
}

/// Dispatch a parsed CLI invocation
pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let board = load_board(cli.config.as_deref())?;
    match cli.command {
        Some(Commands::List(args)) => cmd_list(&board, &args, cli.json),
        Some(Commands::Check) => cmd_check(&board, cli.json),
        None => Ok(()),
    }
}

fn cmd_list(
    board: &Board,
    args: &ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(priority) = &args.priority {
        if Priority::parse(priority).is_none() {
            return Err(format!("unknown priority: {}", priority).into());
        }
    }
    let priority = args.priority.as_deref().and_then(Priority::parse);

    let columns: Vec<&Column> = match &args.column {
        Some(column_id) => {
            let column = board
                .column(column_id)
                .ok_or_else(|| format!("unknown column: {}", column_id))?;
            vec![column]
        }
        None => board.columns.iter().collect(),
    };

    // Priority filter narrows the listing without touching stored order
    let filtered: Vec<Column> = columns
        .iter()
        .map(|c| {
            let mut col = (*c).clone();
            if let Some(p) = priority {
                col.task_ids
                    .retain(|id| board.task(id).is_some_and(|t| t.priority == p));
            }
            col
        })
        .collect();
    let filtered_refs: Vec<&Column> = filtered.iter().collect();

    if json {
        let out = BoardJson::from_board(board, &filtered_refs);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        output::print_board(board, &filtered_refs);
    }
    Ok(())
}

fn cmd_check(board: &Board, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = check_board(board);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if result.valid && result.warnings.is_empty() {
        println!("ok: {} tasks across {} columns", board.tasks.len(), board.columns.len());
    } else {
        for error in &result.errors {
            println!("error: {:?}", error);
        }
        for warning in &result.warnings {
            println!("warning: {:?}", warning);
        }
    }
    if !result.valid {
        std::process::exit(1);
    }
    Ok(())
}
