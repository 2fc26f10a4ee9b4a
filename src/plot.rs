// file: src/plot.rs
// version: 1.0.0
// guid: 664ca4d4-b43b-454c-9da7-43c773b282da

//! Renders a solution as a self-contained interactive 3D web page

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::error::Result;
use crate::weaver::types::Vert;

/// Default directory for rendered plots
pub fn default_plot_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("weave").join("plots"))
        .unwrap_or_else(|| PathBuf::from("plots"))
}

/// Write the solution as an HTML page with an interactive 3D line
/// trace, closing the loop back to the first vertex. Returns the path
/// of the written page.
pub async fn write_plot(solution: &[Vert], dir: &Path) -> Result<PathBuf> {
    let order = solution.len();
    let mut xs = Vec::with_capacity(order + 1);
    let mut ys = Vec::with_capacity(order + 1);
    let mut zs = Vec::with_capacity(order + 1);
    for &(x, y, z) in solution.iter().chain(solution.first()) {
        xs.push(x);
        ys.push(y);
        zs.push(z);
    }
    let coords = serde_json::json!({ "x": xs, "y": ys, "z": zs });

    fs::create_dir_all(dir).await?;
    let path = dir.join(format!("weave-{order}.html"));
    fs::write(&path, render_page(order, &coords.to_string())).await?;
    info!("Wrote plot to {}", path.display());
    Ok(path)
}

fn render_page(order: usize, coords: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>discocube order {order}</title>
<script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
</head>
<body>
<div id="solution" style="width: 100%; height: 100vh;"></div>
<script>
const coords = {coords};
Plotly.newPlot("solution", [{{
  type: "scatter3d",
  mode: "lines",
  x: coords.x,
  y: coords.y,
  z: coords.z,
  line: {{ width: 4, color: coords.z, colorscale: "Portland" }}
}}], {{
  title: "Hamiltonian cycle on the discocube of order {order}",
  margin: {{ l: 0, r: 0, t: 40, b: 0 }},
  scene: {{ aspectmode: "data" }}
}});
</script>
<!-- generated by weave {version} -->
</body>
</html>
"#,
        order = order,
        coords = coords,
        version = crate::VERSION
    )
}
