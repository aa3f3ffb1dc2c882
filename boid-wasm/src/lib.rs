use boid_core::{population, Boid, BoidConfig, Simulation, SimulationEvent, SimulationState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

/// Acceleration magnitude at which the hue saturates to red
const ACCELERATION_HUE_SCALE: f32 = 20.0;

/// Hue in degrees for a boid: 240 (blue) at rest down to 0 (red) under
/// strong acceleration.
pub fn acceleration_hue(acceleration: f32) -> f32 {
    let ratio = (acceleration / ACCELERATION_HUE_SCALE).clamp(0.0, 1.0);
    240.0 * (1.0 - ratio)
}

#[wasm_bindgen]
pub struct BoidSimulation {
    simulation: Simulation,
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    last_timestamp: Option<f64>,
}

#[wasm_bindgen]
impl BoidSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<BoidSimulation, JsValue> {
        let config = BoidConfig::default();
        console_log!(
            "Initializing boid simulation on a {}x{} world",
            config.world.width,
            config.world.height
        );

        let window = web_sys::window().ok_or("no global window")?;
        let document = window.document().ok_or("no document")?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or("canvas not found")?
            .dyn_into::<HtmlCanvasElement>()?;

        canvas.set_width(config.world.width as u32);
        canvas.set_height(config.world.height as u32);

        let context = canvas
            .get_context("2d")?
            .ok_or("no 2d context")?
            .dyn_into::<CanvasRenderingContext2d>()?;

        Ok(BoidSimulation {
            simulation: Simulation::new(config),
            canvas,
            context,
            last_timestamp: None,
        })
    }

    /// Generates the initial population and starts the simulation
    pub fn populate(&mut self) {
        let boids = population::generate(self.simulation.config());
        console_log!("Generated {} boids", boids.len());
        self.simulation
            .handle(SimulationEvent::PopulationReady(boids));
    }

    /// Advances the flock for a frame that took `delta_millis`
    pub fn tick(&mut self, delta_millis: f64) {
        self.simulation.handle(SimulationEvent::FrameElapsed {
            delta_millis: delta_millis as f32,
        });
    }

    /// Advances using a `requestAnimationFrame` timestamp. The first call
    /// only records the timestamp.
    pub fn frame(&mut self, timestamp: f64) {
        if let Some(previous) = self.last_timestamp.replace(timestamp) {
            self.tick(timestamp - previous);
        }
    }

    pub fn render(&self) -> Result<(), JsValue> {
        let width = self.canvas.width() as f64;
        let height = self.canvas.height() as f64;
        let world = self.simulation.config().world;

        // Clear canvas with dark background
        self.context.set_fill_style_str("#0a0a0a");
        self.context.fill_rect(0.0, 0.0, width, height);

        self.context.set_stroke_style_str("rgba(255, 255, 255, 0.5)");
        self.context.set_line_width(1.0);
        self.context
            .stroke_rect(0.0, 0.0, world.width as f64, world.height as f64);

        for boid in self.simulation.current_population() {
            self.draw_boid(boid)?;
        }

        Ok(())
    }

    fn draw_boid(&self, boid: &Boid) -> Result<(), JsValue> {
        let radius = self.simulation.config().agent_radius as f64;
        let x = boid.position.x as f64;
        let y = boid.position.y as f64;

        let hue = acceleration_hue(boid.acceleration.magnitude());
        self.context
            .set_fill_style_str(&format!("hsl({}, 80%, 55%)", hue));
        self.context.begin_path();
        self.context.arc(x, y, radius, 0.0, std::f64::consts::TAU)?;
        self.context.fill();

        // Heading
        let heading = boid.heading();
        self.context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
        self.context.begin_path();
        self.context.move_to(x, y);
        self.context.line_to(
            x + heading.x as f64 * radius * 2.0,
            y + heading.y as f64 * radius * 2.0,
        );
        self.context.stroke();

        Ok(())
    }

    pub fn boid_count(&self) -> usize {
        self.simulation.current_population().len()
    }

    pub fn is_running(&self) -> bool {
        self.simulation.state() == SimulationState::Running
    }

    pub fn frame_count(&self) -> u64 {
        self.simulation.frame_count()
    }
}
