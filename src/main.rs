use fractal_surfaces::{ChannelPresenter, Explorer, ExplorerConfig, Point, RenderEvent};
use log::{error, info};
use std::error::Error;
use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

const RENDER_TIMEOUT: Duration = Duration::from_secs(120);

fn wait_for_frame(label: &str, events: &Receiver<RenderEvent>) -> Result<(), Box<dyn Error>> {
    match events.recv_timeout(RENDER_TIMEOUT)? {
        RenderEvent::Frame(frame) => {
            info!(
                "{} frame {} ready: {}x{} in {:?}",
                label,
                frame.generation,
                frame.raster.width(),
                frame.raster.height(),
                frame.render_duration
            );
            Ok(())
        }
        RenderEvent::Error(err) => {
            error!("{} render {} failed: {}", label, err.generation, err.message);
            Err(err.message.into())
        }
    }
}

fn run(config: ExplorerConfig) -> Result<(), Box<dyn Error>> {
    let (mandelbrot_port, mandelbrot_events) = ChannelPresenter::new();
    let (julia_port, julia_events) = ChannelPresenter::new();
    let mut explorer = Explorer::new(config, Arc::new(mandelbrot_port), Arc::new(julia_port))?;

    explorer.render_mandelbrot()?;
    wait_for_frame("Mandelbrot", &mandelbrot_events)?;

    let viewport = explorer.mandelbrot().viewport();
    // just above the main cardioid
    let pixel = Point {
        x: (viewport.width() as f64 * 0.4) as i32,
        y: (viewport.height() as f64 * 0.3) as i32,
    };
    let (_, plane) = explorer.pointer_readout(pixel);
    info!("rendering Julia set for {}", plane);

    explorer.select_point(pixel)?;
    wait_for_frame("Julia", &julia_events)?;

    let path = explorer.save_julia("startup")?;
    info!("saved Julia set to {}", path.display());

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    run(ExplorerConfig::default())
}
