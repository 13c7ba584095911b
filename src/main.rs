use anyhow::Context;
use clap::Parser;
use onnx_net_drawer::{Result, graph, onnx, render, timing};

#[derive(Parser)]
#[command(name = "onnx-net-drawer")]
#[command(about = "Draw an ONNX model as a graphviz dot file", long_about = None)]
struct Cli {
    /// The input model: a serialized ModelProto, or a .json model description.
    #[arg(long)]
    input: String,

    /// Where to write the dot file.
    #[arg(long)]
    output: String,

    /// The rank direction of the graph.
    #[arg(long, default_value = "LR")]
    rankdir: String,

    /// Embed docstrings as javascript alerts. Useful for SVG output.
    #[arg(long = "embed_docstring", alias = "embed-docstring")]
    embed_docstring: bool,

    /// Per-operator timings (`<op_index> <ns>` per line) for unnamed operators.
    /// Defaults to the bundled samples.
    #[arg(long)]
    timings: Option<String>,

    /// Only log warnings and errors.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        })
        .init();

    // 1) Load the model.
    let model = onnx::load_model(&cli.input)?;

    // 2) Timing samples for unnamed operators.
    let timings = match &cli.timings {
        Some(path) => timing::parse_timing_file(path)?,
        None => timing::TimingTable::bundled(),
    };

    // 3) Build.
    let producer = graph::OpNodeProducer::new()
        .with_timings(timings)
        .embed_docstring(cli.embed_docstring);
    let options = graph::GraphOptions {
        title: Some(model.name.clone()),
        rankdir: cli.rankdir.clone(),
        embed_docstring: cli.embed_docstring,
    };
    let built = graph::build_graph(&model.nodes, &options, Some(&producer));

    // 4) Render dot.
    let dot = render::render_dot(&built);
    std::fs::write(&cli.output, dot).with_context(|| format!("write dot file {}", cli.output))?;
    println!("Wrote {}", cli.output);

    Ok(())
}
