use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use algoscope::config::{Pace, PlaybackConfig};
use algoscope::containers::{BoundedQueue, BoundedStack};
use algoscope::expression::{eval_postfix, Notation};
use algoscope::graph::{self, Graph, SearchAlgorithm, SearchOutcome};
use algoscope::sorting::{parse_values, SortAlgorithm};
use algoscope::trace::{fingerprint, TraceRecorder};
use algoscope::tree::{Bst, Order};
use algoscope::util::join_spaced;
use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "algoscope", about = "Step-by-step traces of classic algorithms")]
struct Cli {
    /// Delay between printed steps (instant, fast, medium, slow).
    #[arg(long, global = true, default_value = "instant")]
    pace: Pace,
    /// Abort if a run produces more than this many steps.
    #[arg(long, global = true)]
    limit: Option<usize>,
    /// Print a BLAKE3 fingerprint of the trace after the last step.
    #[arg(long, global = true)]
    fingerprint: bool,
    /// Log more (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sort comma-separated integers and print every step.
    Sort {
        /// insertion, bubble, selection, merge or quick.
        algorithm: SortAlgorithm,
        /// Values such as "5, 3, 9".
        #[arg(allow_hyphen_values = true)]
        values: String,
    },
    /// Search a graph file for a path from start to goal.
    Search {
        /// bfs or dfs.
        algorithm: SearchAlgorithm,
        /// Graph file (mapping literal, or edge list with --edges).
        #[arg(long)]
        graph: PathBuf,
        #[arg(long)]
        start: String,
        #[arg(long)]
        goal: String,
        /// Read the graph as `from to weight` lines.
        #[arg(long)]
        edges: bool,
    },
    /// Print the preorder or postorder of a graph.
    Traverse {
        order: GraphOrder,
        /// Graph file (mapping literal, or edge list with --edges).
        #[arg(long)]
        graph: PathBuf,
        /// Start node (default: first node of the file).
        #[arg(long)]
        start: Option<String>,
        /// Read the graph as `from to weight` lines.
        #[arg(long)]
        edges: bool,
    },
    /// Build a binary search tree and query it.
    Bst {
        /// Values to insert, in order.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        insert: Vec<i64>,
        /// Values to delete after inserting.
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        delete: Vec<i64>,
        /// Value to look up at the end.
        #[arg(long, allow_negative_numbers = true)]
        search: Option<i64>,
        /// Walk the whole tree with bfs or dfs when searching.
        #[arg(long, requires = "search")]
        walk: Option<SearchAlgorithm>,
        /// inorder, preorder or postorder.
        #[arg(long, default_value = "inorder")]
        order: Order,
    },
    /// Convert an infix expression or evaluate a postfix one.
    Expr {
        mode: ExprMode,
        expression: String,
    },
    /// Run `+item` (insert) and `-` (remove) operations on a bounded container.
    Containers {
        kind: ContainerKind,
        #[arg(long, default_value_t = PlaybackConfig::DEFAULT_CAPACITY)]
        capacity: usize,
        #[arg(allow_hyphen_values = true)]
        ops: Vec<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GraphOrder {
    Preorder,
    Postorder,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExprMode {
    Postfix,
    Prefix,
    Eval,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ContainerKind {
    Queue,
    Stack,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = PlaybackConfig::new(cli.pace, cli.limit, PlaybackConfig::DEFAULT_CAPACITY)
        .context("invalid playback options")?;
    let player = Player {
        config,
        fingerprint: cli.fingerprint,
    };

    match cli.command {
        Commands::Sort { algorithm, values } => run_sort(&player, algorithm, &values)?,
        Commands::Search {
            algorithm,
            graph,
            start,
            goal,
            edges,
        } => run_search(&player, algorithm, &graph, &start, &goal, edges)?,
        Commands::Traverse {
            order,
            graph,
            start,
            edges,
        } => run_traverse(order, &graph, start, edges)?,
        Commands::Bst {
            insert,
            delete,
            search,
            walk,
            order,
        } => run_bst(&player, &insert, &delete, search, walk, order)?,
        Commands::Expr { mode, expression } => run_expr(&player, mode, &expression)?,
        Commands::Containers {
            kind,
            capacity,
            ops,
        } => {
            let config = player
                .config
                .with_capacity(capacity)
                .context("invalid container capacity")?;
            let player = Player { config, ..player };
            run_containers(&player, kind, &ops)?
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints steps as they are pulled, paced and bounded by the config
#[derive(Debug)]
struct Player {
    config: PlaybackConfig,
    fingerprint: bool,
}

impl Player {
    fn play<S: Display>(&self, steps: impl IntoIterator<Item = S>) -> Result<Vec<S>> {
        let mut recorder = TraceRecorder::from_config(&self.config);
        for step in steps {
            if !recorder.is_empty() {
                thread::sleep(self.config.pace.delay());
            }
            recorder
                .record(step)
                .context("run stopped; raise --limit to see the whole trace")?;
            if let Some(step) = recorder.last() {
                let rendered = step.to_string().replace('\n', "\n      ");
                println!("{:>4}  {rendered}", recorder.len());
            }
        }
        if self.fingerprint {
            println!("fingerprint {}", fingerprint(recorder.steps()));
        }
        Ok(recorder.into_steps())
    }
}

fn run_sort(player: &Player, algorithm: SortAlgorithm, values: &str) -> Result<()> {
    let values = parse_values(values).context("invalid values")?;
    info!(%algorithm, n = values.len(), "sorting");
    player.play(algorithm.steps(&values))?;
    Ok(())
}

fn run_search(
    player: &Player,
    algorithm: SearchAlgorithm,
    path: &Path,
    start: &str,
    goal: &str,
    edges: bool,
) -> Result<()> {
    let graph = load_graph(path, edges)?;
    if !graph.contains(start) {
        warn!(start, "start node is not in the graph");
    }
    let steps = player.play(algorithm.steps(&graph, start, goal))?;

    let outcome = SearchOutcome::collect(steps);
    println!("visited {}", outcome.visit_order.join(" "));
    match outcome.path {
        Some(path) => println!("path    {}", path.join(" -> ")),
        None => println!("path    none ({goal} is not reachable from {start})"),
    }
    Ok(())
}

fn run_traverse(order: GraphOrder, path: &Path, start: Option<String>, edges: bool) -> Result<()> {
    let graph = load_graph(path, edges)?;
    let start = match start {
        Some(start) => start,
        None => match graph.first_node() {
            Some(first) => first.to_string(),
            None => bail!("graph in {} has no nodes", path.display()),
        },
    };
    let nodes = match order {
        GraphOrder::Preorder => graph::preorder(&graph, &start),
        GraphOrder::Postorder => graph::postorder(&graph, &start),
    };
    println!("{}", nodes.join(" "));
    Ok(())
}

fn run_bst(
    player: &Player,
    insert: &[i64],
    delete: &[i64],
    search: Option<i64>,
    walk: Option<SearchAlgorithm>,
    order: Order,
) -> Result<()> {
    let mut tree = Bst::new();
    let mut events = Vec::new();
    for &value in insert {
        let inserted = tree.insert(value);
        events.push(format!("insert {value:<6}{}", applied(inserted, "duplicate")));
    }
    for &value in delete {
        let deleted = tree.delete(value);
        events.push(format!("delete {value:<6}{}", applied(deleted, "not found")));
    }
    let mut walked = None;
    match (search, walk) {
        (Some(value), Some(algorithm)) => {
            let result = tree.search_walk(value, algorithm);
            for key in &result.visited {
                events.push(format!("visit  {key}"));
            }
            events.push(format!("search {value:<6}{}", applied(result.found(), "not found")));
            walked = result.path;
        }
        (Some(value), None) => {
            let found = tree.search(value).is_some();
            events.push(format!("search {value:<6}{}", applied(found, "not found")));
        }
        (None, _) => {}
    }
    player.play(events)?;

    let values = tree.traverse(order);
    println!("{:<10}{}", order.name(), join_spaced(&values));
    if let Some(path) = walked {
        println!("path      {}", join_spaced(&path));
    }
    println!("height    {}", tree.height());
    Ok(())
}

fn run_expr(player: &Player, mode: ExprMode, expression: &str) -> Result<()> {
    let notation = match mode {
        ExprMode::Postfix => Notation::Postfix,
        ExprMode::Prefix => Notation::Prefix,
        ExprMode::Eval => {
            let evaluation = eval_postfix(expression);
            player.play(evaluation.steps)?;
            match evaluation.value {
                Some(value) => println!("result  {value}"),
                None => println!("result  undefined"),
            }
            return Ok(());
        }
    };

    let conversion = notation.convert(expression);
    player.play(conversion.steps)?;
    println!("{:<8}{}", notation.name(), conversion.output);
    Ok(())
}

fn run_containers(player: &Player, kind: ContainerKind, ops: &[String]) -> Result<()> {
    let capacity = player.config.capacity;
    let mut events = Vec::with_capacity(ops.len());

    match kind {
        ContainerKind::Queue => {
            let mut queue = BoundedQueue::new(capacity);
            for op in ops {
                let event = match parse_op(op)? {
                    Some(item) => {
                        let ok = queue.enqueue(item.to_string());
                        format!("enqueue {item:<8}{}", applied(ok, "full"))
                    }
                    None => match queue.dequeue() {
                        Some(item) => format!("dequeue {item:<8}ok"),
                        None => format!("dequeue {:<8}empty", ""),
                    },
                };
                events.push(format!("{event:<28}[{}]", join_spaced(queue.iter())));
            }
        }
        ContainerKind::Stack => {
            let mut stack = BoundedStack::new(capacity);
            for op in ops {
                let event = match parse_op(op)? {
                    Some(item) => {
                        let ok = stack.push(item.to_string());
                        format!("push    {item:<8}{}", applied(ok, "full"))
                    }
                    None => match stack.pop() {
                        Some(item) => format!("pop     {item:<8}ok"),
                        None => format!("pop     {:<8}empty", ""),
                    },
                };
                events.push(format!("{event:<28}[{}]", join_spaced(stack.iter())));
            }
        }
    }

    player.play(events)?;
    Ok(())
}

/// `+item` inserts `item`, `-` removes
fn parse_op(op: &str) -> Result<Option<&str>> {
    if op == "-" {
        return Ok(None);
    }
    match op.strip_prefix('+') {
        Some(item) if !item.is_empty() => Ok(Some(item)),
        _ => bail!("invalid operation '{op}' (use +item or -)"),
    }
}

fn applied(ok: bool, reason: &str) -> String {
    if ok {
        "ok".to_string()
    } else {
        format!("skipped ({reason})")
    }
}

fn load_graph(path: &Path, edges: bool) -> Result<Graph> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph from {}", path.display()))?;
    let graph = if edges {
        Graph::parse_edge_list(&text)
    } else {
        text.parse::<Graph>()
    }
    .with_context(|| format!("failed to parse graph in {}", path.display()))?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "loaded graph"
    );
    Ok(graph)
}
