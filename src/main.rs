use analyzer::main::Analyzer;
use clap::Parser;
use config::Config;
use image_classifier::impl_fake::ImageClassifierFake;
use image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use image_classifier::interface::ImageClassifier;
use image_cropper::impl_image::ImageCropperImage;
use image_picker::impl_file::{ImagePickerFile, PickSource};
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use presenter::impl_console::PresenterConsole;
use presenter::impl_gui::PresenterGui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use user_input::impl_channel::UserInputChannel;
use user_input::impl_console::UserInputConsole;

mod analyzer;
mod config;
mod image_classifier;
mod image_cropper;
mod image_picker;
mod image_ref;
mod library;
mod presenter;
mod result_interpreter;
mod user_input;

/// Pick an image, crop it square and check it with the skin cancer classifier.
#[derive(Parser, Debug)]
#[command(name = "asclepius", version)]
struct Cli {
    /// JSON file overriding the default configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Classify this image once and exit
    #[arg(long)]
    image: Option<PathBuf>,

    /// Directory the gallery button picks the newest image from
    #[arg(long)]
    gallery_dir: Option<PathBuf>,

    /// ONNX model file
    #[arg(long)]
    model: Option<String>,

    /// Model labels in output order, comma separated
    #[arg(long, value_delimiter = ',')]
    labels: Option<Vec<String>>,

    /// Open a window instead of using the terminal
    #[arg(long)]
    gui: bool,

    /// Use random scores instead of loading a model
    #[arg(long)]
    fake_classifier: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(gallery_dir) = &cli.gallery_dir {
        config.gallery_dir = gallery_dir.clone();
    }
    if let Some(model) = &cli.model {
        config.model.onnx_model_path = model.clone();
    }
    if let Some(labels) = &cli.labels {
        config.model.labels = labels.iter().map(|l| l.trim().to_string()).collect();
    }
    let pick_source = match &cli.image {
        Some(image) => {
            // in the window the image waits for the Gallery button instead
            if !cli.gui {
                config.run_once = true;
            }
            PickSource::Path(image.clone())
        }
        None => PickSource::Gallery(config.gallery_dir.clone()),
    };

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_picker = Arc::new(ImagePickerFile::new(pick_source, logger.clone()));

    let image_cropper = Arc::new(ImageCropperImage::new(
        config.cache_dir.clone(),
        config.crop_max_size,
        logger.clone(),
    ));

    let image_classifier: Arc<dyn ImageClassifier + Send + Sync> = if cli.fake_classifier {
        Arc::new(ImageClassifierFake::new(logger.clone()))
    } else {
        Arc::new(ImageClassifierTractOnnx::new(config.model.clone(), logger.clone())?)
    };

    if cli.gui {
        let (input_sender, user_input) = UserInputChannel::new();
        let (presenter, window) = PresenterGui::new(input_sender);

        let analyzer = Analyzer::new(
            config,
            logger.clone(),
            Arc::new(user_input),
            image_picker,
            image_cropper,
            image_classifier,
            Arc::new(Mutex::new(presenter)),
        );

        let app_thread = std::thread::spawn(move || analyzer.run().map(|_| ()));

        // the window has to own the main thread
        window.run()?;

        return match app_thread.join() {
            Ok(result) => result,
            Err(_) => Err("analyzer thread panicked".into()),
        };
    }

    let analyzer = Analyzer::new(
        config,
        logger.clone(),
        Arc::new(UserInputConsole::new(logger.clone())),
        image_picker,
        image_cropper,
        image_classifier,
        Arc::new(Mutex::new(PresenterConsole::new())),
    );

    analyzer.run()?;

    Ok(())
}
