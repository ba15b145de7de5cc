use anyhow::Result;
use clap::Parser;
use std::path::Path;

#[derive(Parser)]
#[command(name = "tetra-cli")]
#[command(about = "A CLI tool for converting TetGen node/ele meshes to the binary format")]
struct Cli {
    /// Input .node file path
    #[arg(long)]
    node: Option<String>,

    /// Input .ele file path
    #[arg(long)]
    ele: Option<String>,

    /// Output binary file path
    #[arg(short, long)]
    output: Option<String>,

    /// Node attribute channel written as the per-point scalar
    #[arg(long, default_value_t = 0)]
    attribute: u32,

    /// Print the header summary of an existing binary mesh instead of converting
    #[arg(long)]
    inspect: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.inspect.as_deref() {
        return inspect_binary(path);
    }

    let node_path = cli
        .node
        .ok_or_else(|| anyhow::anyhow!("--node is required unless --inspect is used"))?;
    let ele_path = cli
        .ele
        .ok_or_else(|| anyhow::anyhow!("--ele is required unless --inspect is used"))?;
    let output_path = cli
        .output
        .ok_or_else(|| anyhow::anyhow!("--output is required unless --inspect is used"))?;

    convert_node_ele_to_binary(&node_path, &ele_path, cli.attribute, &output_path)
}

fn convert_node_ele_to_binary(
    node_path: &str,
    ele_path: &str,
    attribute: u32,
    output_path: &str,
) -> Result<()> {
    // Check input file extensions
    let node_ext = Path::new(node_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    if node_ext != "node" {
        anyhow::bail!("Point input must be a .node file");
    }

    let ele_ext = Path::new(ele_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    if ele_ext != "ele" {
        anyhow::bail!("Connectivity input must be a .ele file");
    }

    tetra_oxide::io::binary::write_node_ele_as_binary(node_path, ele_path, attribute, output_path)
        .map_err(|e| anyhow::anyhow!("Failed to convert mesh: {e}"))?;

    Ok(())
}

fn inspect_binary(path: &str) -> Result<()> {
    let mesh = tetra_oxide::io::binary::read_binary(path)
        .map_err(|e| anyhow::anyhow!("Failed to read binary mesh: {e}"))?;

    println!(
        "{path}: {} points, {} indices, {} points per primitive",
        mesh.num_points(),
        mesh.num_indices(),
        mesh.points_per_primitive
    );

    Ok(())
}
