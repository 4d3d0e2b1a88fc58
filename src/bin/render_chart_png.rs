use chart_canvas::ChartRequest;
use chart_canvas::render::{CairoSurface, SurfaceRegistry};
use chart_canvas::telemetry::init_default_tracing;
use std::fs::{self, File};
use std::path::PathBuf;

const DEFAULT_WIDTH: i32 = 640;
const DEFAULT_HEIGHT: i32 = 400;

#[derive(Debug)]
struct CliArgs {
    request_path: PathBuf,
    output_path: PathBuf,
    width: i32,
    height: i32,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.request_path).map_err(|err| {
        format!(
            "failed to read request `{}`: {err}",
            args.request_path.display()
        )
    })?;
    let request = ChartRequest::from_json(&raw).map_err(|err| err.to_string())?;

    let surface = CairoSurface::new(args.width, args.height).map_err(|err| err.to_string())?;
    let mut registry = SurfaceRegistry::new();
    registry.insert(request.surface_id(), surface);
    let surface = request
        .render(&mut registry)
        .map_err(|err| err.to_string())?;

    let mut output = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create output `{}`: {err}",
            args.output_path.display()
        )
    })?;
    surface
        .write_png(&mut output)
        .map_err(|err| err.to_string())?;
    println!("wrote {}", args.output_path.display());
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut positional = Vec::new();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --size".to_owned())?;
                (width, height) = parse_size(&value)?;
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ if arg.starts_with("--") => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
            _ => positional.push(PathBuf::from(arg)),
        }
    }

    let [request_path, output_path]: [PathBuf; 2] = positional
        .try_into()
        .map_err(|_| usage_message().to_owned())?;
    Ok(CliArgs {
        request_path,
        output_path,
        width,
        height,
    })
}

fn parse_size(value: &str) -> Result<(i32, i32), String> {
    let (width, height) = value
        .split_once('x')
        .ok_or_else(|| format!("size `{value}` must look like WIDTHxHEIGHT"))?;
    let parse = |raw: &str| {
        raw.parse::<i32>()
            .map_err(|err| format!("invalid size component `{raw}`: {err}"))
    };
    Ok((parse(width)?, parse(height)?))
}

fn usage_message() -> &'static str {
    "usage: render_chart_png <request.json> <output.png> [--size WIDTHxHEIGHT]"
}
