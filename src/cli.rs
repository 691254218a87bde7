//! The command line pipeline: build the site, compute the routes home, export and sketch them.
//!
//! Every step is logged at `info`. The outcome is reported as a [`RunStatus`] that maps onto the
//! process exit code.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info, warn};

use crate::{
    document::RouteDocument,
    engine::compute_shortest_paths,
    error::GraphError,
    graph::{Graph, WeightPolicy},
    render::{Renderer, SceneView, TextRenderer},
    topology::SiteTopology,
    NodeID,
};

/// Computes the shortest route from every location of the site back home and exports them.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about)]
pub struct Args {
    /// File the route document is written to
    #[arg(short, long, default_value = "shortest_paths.yaml")]
    pub output: PathBuf,

    /// Node the routes lead to, instead of the home location of the site
    #[arg(short, long)]
    pub destination: Option<NodeID>,

    /// YAML description of the site, instead of the reference site
    #[arg(short, long)]
    pub site: Option<PathBuf>,
}

impl Args {
    /// Arguments for the reference site, writing to `output`
    pub fn new(output: impl Into<PathBuf>) -> Args {
        Args {
            output: output.into(),
            destination: None,
            site: None,
        }
    }
}

/// How a [`run`] ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// All routes were computed and exported
    Success,
    /// The routes were computed, but something after that failed
    Failure,
    /// The site or the destination is invalid, nothing was computed
    InvalidInput,
}

impl RunStatus {
    /// The process exit code: `0`, `1` or `2`
    pub fn code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Failure => 1,
            RunStatus::InvalidInput => 2,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> ExitCode {
        ExitCode::from(status.code())
    }
}

impl From<&GraphError> for RunStatus {
    fn from(err: &GraphError) -> RunStatus {
        if err.is_input_error() {
            RunStatus::InvalidInput
        } else {
            RunStatus::Failure
        }
    }
}

fn load_site(args: &Args) -> Option<SiteTopology> {
    let Some(file) = &args.site else {
        return Some(SiteTopology::reference());
    };
    let text = std::fs::read_to_string(file)
        .map_err(|err| error!("cannot read {}: {}", file.display(), err))
        .ok()?;
    SiteTopology::from_yaml_str(&text)
        .map_err(|err| error!("invalid site description in {}: {}", file.display(), err))
        .ok()
}

fn log_edges(graph: &Graph) {
    let mut edges: Vec<_> = graph
        .edges()
        .iter()
        .map(|edge| {
            let (a, b) = edge.endpoints();
            (a.min(b), a.max(b), edge.weight())
        })
        .collect();
    edges.sort_by_key(|&(a, b, _)| (a, b));
    for (a, b, weight) in edges {
        info!("    {:2} -- {:2} : {}", a, b, weight);
    }
}

/// Runs the whole pipeline and draws the site sketch to `sketch`.
///
/// A failing sketch is only logged, it never changes the status.
pub fn run(args: &Args, sketch: impl Write) -> RunStatus {
    let Some(site) = load_site(args) else {
        return RunStatus::InvalidInput;
    };
    let policy = WeightPolicy::default();
    let destination = args.destination.unwrap_or(site.home);

    info!("[1] building the site graph");
    let graph = match site.build_graph(&policy) {
        Ok(graph) => graph,
        Err(err) => {
            error!("invalid site: {}", err);
            return RunStatus::from(&err);
        }
    };
    info!("    nodes: {}", graph.node_count());
    info!("    edges: {}", graph.edge_count());

    info!("[2] edges (node -- node : weight)");
    log_edges(&graph);

    info!("[3] computing shortest routes to node {}", destination);
    let routes = match compute_shortest_paths(&graph, destination) {
        Ok(routes) => routes,
        Err(err) => {
            error!("{}", err);
            return RunStatus::from(&err);
        }
    };

    info!("[4] results");
    for result in routes.iter() {
        info!("    {}", result);
        if let Some(path) = result.route() {
            debug!("    {}", path);
        }
    }
    info!(
        "    {} of {} nodes can reach node {}",
        routes.reachable_count(),
        routes.len(),
        destination
    );
    let unreachable = routes.unreachable();
    if !unreachable.is_empty() {
        warn!("    no route to node {} from {:?}", destination, unreachable);
    }

    info!("[5] writing {}", args.output.display());
    let document = RouteDocument::for_site(&site, &policy, &routes);
    let status = match document.write_to(&args.output) {
        Ok(()) => {
            info!("    saved routes to '{}'", args.output.display());
            RunStatus::Success
        }
        Err(err) => {
            error!("    {}", err);
            RunStatus::Failure
        }
    };

    info!("[6] site layout");
    let scene = SceneView::new(&graph, Some(&routes));
    if let Err(err) = TextRenderer::new(sketch).render(&scene) {
        warn!("    rendering failed: {}", err);
    }

    status
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(RunStatus::Success.code(), 0);
        assert_eq!(RunStatus::Failure.code(), 1);
        assert_eq!(RunStatus::InvalidInput.code(), 2);
    }

    #[test]
    fn status_of_errors() {
        assert_eq!(
            RunStatus::from(&GraphError::UnknownNode(12)),
            RunStatus::InvalidInput
        );
        assert_eq!(
            RunStatus::from(&GraphError::TimeLimitExceeded),
            RunStatus::Failure
        );
    }

    #[test]
    fn parse_arguments() {
        let args = Args::parse_from(["site_routing", "-o", "out.yaml", "--destination", "3"]);
        assert_eq!(args.output, PathBuf::from("out.yaml"));
        assert_eq!(args.destination, Some(3));
        assert_eq!(args.site, None);

        let args = Args::parse_from(["site_routing"]);
        assert_eq!(args, Args::new("shortest_paths.yaml"));
    }
}
