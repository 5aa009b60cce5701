mod io;
mod provenance;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use femesh::geom2::rand::{draw_boundary_radial, RadialCfg, ReplayToken, VertexCount};
use femesh::geom2::{angle_cosine, orientation};
use femesh::interop::{export_mesh, EditorKind, GraphEditorPayload, MeshEditorPayload};
use femesh::{Domain, Mesh};
use io::{read_json, write_json, DomainFile, ExportFile, MeshFile};
use polars::prelude::*;
use provenance::{write_sidecar, Payload};
use serde_json::{json, Value};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "femesh")]
#[command(about = "Triangulate, refine and export 2D finite-element meshes")]
struct Cmd {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Draw a random star-shaped boundary and write it as a domain file
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 8)]
        n_min: usize,
        #[arg(long, default_value_t = 16)]
        n_max: usize,
        #[arg(long, default_value_t = 0.3)]
        angle_jitter: f64,
        #[arg(long, default_value_t = 0.25)]
        radial_jitter: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Validate a domain file and triangulate it
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Fit the domain into the unit square first
        #[arg(long)]
        normalize: bool,
        /// Refinement passes applied after triangulation
        #[arg(long, default_value_t = 0)]
        refine: u32,
    },
    /// Refine every element of a mesh file
    Refine {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1)]
        levels: u32,
    },
    /// Per-element quality table (.csv or .parquet)
    Stats {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Export a mesh file for a solver
    Export {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "hermes2d")]
        target: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the editor payload for a domain (js) or mesh (flex) file
    Editor {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "js")]
        editor: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    run(cmd.action)
}

fn run(action: Action) -> Result<()> {
    match action {
        Action::Sample {
            seed,
            index,
            n_min,
            n_max,
            angle_jitter,
            radial_jitter,
            out,
        } => {
            let cfg = RadialCfg {
                vertex_count: VertexCount::Uniform {
                    min: n_min,
                    max: n_max,
                },
                angle_jitter_frac: angle_jitter,
                radial_jitter,
                ..RadialCfg::default()
            };
            sample(cfg, ReplayToken { seed, index }, &out)
        }
        Action::Triangulate {
            input,
            out,
            normalize,
            refine,
        } => triangulate(&input, &out, normalize, refine),
        Action::Refine { input, out, levels } => refine(&input, &out, levels),
        Action::Stats { input, out } => stats(&input, &out),
        Action::Export { input, target, out } => export(&input, &target, &out),
        Action::Editor { input, editor: name } => editor(&input, &name),
        Action::Report => report(),
    }
}

fn mesh_summary(m: &Mesh) -> Value {
    json!({
        "nodes": m.nodes().len(),
        "elements": m.elements().len(),
        "boundaries": m.boundaries().len(),
        "ccw": m.check_element_orientations(),
    })
}

fn sample(cfg: RadialCfg, tok: ReplayToken, out: &Path) -> Result<()> {
    let (nodes, edges) = draw_boundary_radial(cfg, tok);
    let domain = Domain::new(nodes, &edges)?;
    tracing::info!(
        seed = tok.seed,
        index = tok.index,
        nodes = domain.nodes().len(),
        area = domain.boundary_area(),
        "sample"
    );
    write_json(out, &DomainFile::from_domain(&domain))?;
    let params = json!({
        "seed": tok.seed,
        "index": tok.index,
        "angle_jitter": cfg.angle_jitter_frac,
        "radial_jitter": cfg.radial_jitter,
    });
    write_sidecar(
        out,
        Payload::new("sample", params).with_summary(json!({
            "nodes": domain.nodes().len(),
            "area": domain.boundary_area(),
        })),
    )?;
    Ok(())
}

fn triangulate(input: &Path, out: &Path, normalize: bool, levels: u32) -> Result<()> {
    let file: DomainFile = read_json(input)?;
    let mut domain = file.to_domain()?;
    if normalize {
        domain.normalize()?;
    }
    let mut mesh = domain.triangulate()?;
    for _ in 0..levels {
        mesh.refine_all_elements()?;
    }
    tracing::info!(
        input = %input.display(),
        elements = mesh.elements().len(),
        nodes = mesh.nodes().len(),
        "triangulate"
    );
    write_json(out, &MeshFile::from_mesh(&mesh))?;
    let params = json!({
        "input": input.to_string_lossy(),
        "normalize": normalize,
        "refine": levels,
    });
    write_sidecar(
        out,
        Payload::new("triangulate", params).with_summary(mesh_summary(&mesh)),
    )?;
    Ok(())
}

fn refine(input: &Path, out: &Path, levels: u32) -> Result<()> {
    let mut mesh = read_json::<MeshFile>(input)?.to_mesh()?;
    for _ in 0..levels {
        mesh.refine_all_elements()?;
    }
    tracing::info!(levels, elements = mesh.elements().len(), "refine");
    write_json(out, &MeshFile::from_mesh(&mesh))?;
    let params = json!({ "input": input.to_string_lossy(), "levels": levels });
    write_sidecar(
        out,
        Payload::new("refine", params).with_summary(mesh_summary(&mesh)),
    )?;
    Ok(())
}

/// One row per element: signed area, side lengths and smallest corner angle.
fn element_stats(mesh: &Mesh) -> PolarsResult<DataFrame> {
    let nodes = mesh.nodes();
    let n = mesh.elements().len();
    let mut index = Vec::with_capacity(n);
    let mut corners = Vec::with_capacity(n);
    let mut area = Vec::with_capacity(n);
    let mut min_edge = Vec::with_capacity(n);
    let mut max_edge = Vec::with_capacity(n);
    let mut min_angle = Vec::with_capacity(n);
    for (i, e) in mesh.elements().iter().enumerate() {
        let ids = e.nodes();
        let k = ids.len();
        let mut a2 = 0.0;
        let mut lo = f64::INFINITY;
        let mut hi = 0.0_f64;
        let mut ang = f64::INFINITY;
        for j in 0..k {
            let (p, q, r) = (
                nodes[ids[j]],
                nodes[ids[(j + 1) % k]],
                nodes[ids[(j + 2) % k]],
            );
            // Fan from the first corner.
            if j + 2 < k {
                a2 += orientation(nodes[ids[0]], q, r);
            }
            let len = (q - p).norm();
            lo = lo.min(len);
            hi = hi.max(len);
            ang = ang.min(angle_cosine(p, r, q).clamp(-1.0, 1.0).acos().to_degrees());
        }
        index.push(i as u64);
        corners.push(k as u64);
        area.push(a2 / 2.0);
        min_edge.push(lo);
        max_edge.push(hi);
        min_angle.push(ang);
    }
    df!(
        "element" => index,
        "corners" => corners,
        "area" => area,
        "min_edge" => min_edge,
        "max_edge" => max_edge,
        "min_angle_deg" => min_angle,
    )
}

fn stats(input: &Path, out: &Path) -> Result<()> {
    let mesh = read_json::<MeshFile>(input)?.to_mesh()?;
    let mut df = element_stats(&mesh)?;
    io::ensure_parent(out)?;
    match out.extension().and_then(|s| s.to_str()) {
        Some("csv") => {
            let mut f = File::create(out)?;
            CsvWriter::new(&mut f).include_header(true).finish(&mut df)?;
        }
        Some("parquet") => {
            let f = File::create(out)?;
            ParquetWriter::new(f).finish(&mut df)?;
        }
        _ => bail!("unsupported stats format {} (use .csv or .parquet)", out.display()),
    }
    let totals = df
        .clone()
        .lazy()
        .select([
            col("area").sum().alias("total_area"),
            col("min_angle_deg").min().alias("min_angle_deg"),
            col("max_edge").max().alias("max_edge"),
        ])
        .collect()?;
    tracing::info!(rows = df.height(), cols = df.width(), "stats");
    println!("{totals}");
    write_sidecar(
        out,
        Payload::new("stats", json!({ "input": input.to_string_lossy() }))
            .with_summary(mesh_summary(&mesh)),
    )?;
    Ok(())
}

fn export(input: &Path, target: &str, out: &Path) -> Result<()> {
    let mesh = read_json::<MeshFile>(input)?.to_mesh()?;
    let exported = ExportFile::hermes2d(export_mesh(&mesh, target)?);
    tracing::info!(export_target = target, elements = exported.elements.len(), "export");
    write_json(out, &exported)?;
    write_sidecar(
        out,
        Payload::new(
            "export",
            json!({ "input": input.to_string_lossy(), "target": target }),
        )
        .with_summary(mesh_summary(&mesh)),
    )?;
    Ok(())
}

fn editor_payload(input: &Path, name: &str) -> Result<Value> {
    Ok(match EditorKind::parse(name)? {
        EditorKind::GraphJs => {
            let domain = read_json::<DomainFile>(input)?.to_domain()?;
            let p = GraphEditorPayload::from_domain(&domain);
            json!({
                "num_vertices": p.num_vertices,
                "edges": p.edges,
                "pos": p.positions,
            })
        }
        EditorKind::MeshFlex => {
            let mesh = read_json::<MeshFile>(input)?.to_mesh()?;
            let p = MeshEditorPayload::from_mesh(&mesh);
            json!({
                "nodes": p.nodes,
                "elements": p.elements,
                "boundaries": p.boundaries,
                "curves": p.curves,
            })
        }
    })
}

fn editor(input: &Path, name: &str) -> Result<()> {
    let payload = editor_payload(input, name)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::base_doc("report", json!({}));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
