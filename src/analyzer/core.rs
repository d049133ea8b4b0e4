use crate::config::Config;
use crate::image_classifier::interface::ClassifierOutput;
use crate::image_ref::ImageRef;
use crate::result_interpreter::{interpret, Interpretation};
use crate::user_input::interface::UserInputEvent;

pub const CROP_FAILED_MESSAGE: &str = "Failed to load image.";
pub const NO_IMAGE_MESSAGE: &str = "Failed to classify image: no image selected.";
pub const NO_RESULTS_MESSAGE: &str = "No classification results";

/// Everything one classification needs, carried through the effect and
/// back in the completion event.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest {
    pub id: u64,
    pub image: ImageRef,
}

#[derive(Debug, Clone, PartialEq)]
pub enum State {
    NoImage,
    Picking,
    Cropping { source: ImageRef },
    ImageReady { image: ImageRef },
    Analyzing { request: AnalyzeRequest },
    ShowingResult { image: ImageRef, text: String },
    Exiting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub state: State,
    pub next_request_id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    UserInput(UserInputEvent),
    PickDone(Result<Option<ImageRef>, String>),
    CropDone {
        source: ImageRef,
        result: Result<ImageRef, String>,
    },
    ClassifyDone {
        request_id: u64,
        result: Result<ClassifierOutput, String>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SubscribeUserInput,
    PickImage,
    CropImage { source: ImageRef },
    ClassifyImage { request: AnalyzeRequest },
    ShowToast { message: String },
    LogInfo { message: String },
    LogError { message: String },
    Exit,
}

impl Effect {
    fn toast(message: &str) -> Self {
        Effect::ShowToast {
            message: message.to_string(),
        }
    }
}

pub fn init(config: &Config) -> (Model, Vec<Effect>) {
    if config.run_once {
        (
            Model {
                state: State::Picking,
                next_request_id: 1,
            },
            vec![Effect::PickImage],
        )
    } else {
        (
            Model {
                state: State::NoImage,
                next_request_id: 1,
            },
            vec![Effect::SubscribeUserInput],
        )
    }
}

pub fn transition(config: &Config, model: Model, event: Event) -> (Model, Vec<Effect>) {
    let next_request_id = model.next_request_id;
    let with_state = |state: State| Model {
        state,
        next_request_id,
    };

    match (model.state.clone(), event) {
        (State::Exiting, _) => (model, vec![]),

        (_, Event::UserInput(UserInputEvent::Quit)) => {
            (with_state(State::Exiting), vec![Effect::Exit])
        }

        // Gallery
        (
            State::NoImage
            | State::ImageReady { .. }
            | State::Analyzing { .. }
            | State::ShowingResult { .. },
            Event::UserInput(UserInputEvent::Gallery),
        ) => (with_state(State::Picking), vec![Effect::PickImage]),

        (State::Picking, Event::PickDone(Ok(Some(source)))) => (
            with_state(State::Cropping {
                source: source.clone(),
            }),
            vec![Effect::CropImage { source }],
        ),
        (State::Picking, Event::PickDone(Ok(None))) => {
            (with_state(State::NoImage), finish(config, vec![]))
        }
        (State::Picking, Event::PickDone(Err(message))) => (
            with_state(State::NoImage),
            finish(config, vec![Effect::ShowToast { message }]),
        ),

        // Crop
        (
            State::Cropping { source },
            Event::CropDone {
                source: done_source,
                result,
            },
        ) if source == done_source => match result {
            Ok(cropped) => image_ready(config, model, cropped, vec![]),
            Err(message) => image_ready(
                config,
                model,
                source,
                vec![
                    Effect::LogError {
                        message: format!("Crop failed: {}", message),
                    },
                    Effect::toast(CROP_FAILED_MESSAGE),
                ],
            ),
        },

        // Analyze
        (State::ImageReady { image }, Event::UserInput(UserInputEvent::Analyze)) => {
            start_analysis(model, image, vec![])
        }
        (State::NoImage | State::Picking, Event::UserInput(UserInputEvent::Analyze)) => (
            model,
            vec![
                Effect::toast(NO_IMAGE_MESSAGE),
                Effect::LogError {
                    message: "Image reference is missing.".to_string(),
                },
            ],
        ),

        (State::Analyzing { request }, Event::ClassifyDone { request_id, result })
            if request.id == request_id =>
        {
            match result {
                Ok(output) => show_output(config, with_state, request, output),
                Err(message) => (
                    with_state(State::ImageReady {
                        image: request.image,
                    }),
                    finish(config, vec![Effect::ShowToast { message }]),
                ),
            }
        }

        // Result screen
        (State::ShowingResult { image, .. }, Event::UserInput(UserInputEvent::Back)) => {
            (with_state(State::ImageReady { image }), vec![])
        }

        // Stale completions and buttons that do nothing in this state
        _ => (model, vec![]),
    }
}

fn image_ready(
    config: &Config,
    model: Model,
    image: ImageRef,
    effects: Vec<Effect>,
) -> (Model, Vec<Effect>) {
    if config.run_once {
        return start_analysis(model, image, effects);
    }
    (
        Model {
            state: State::ImageReady { image },
            next_request_id: model.next_request_id,
        },
        effects,
    )
}

fn start_analysis(
    model: Model,
    image: ImageRef,
    mut effects: Vec<Effect>,
) -> (Model, Vec<Effect>) {
    let request = AnalyzeRequest {
        id: model.next_request_id,
        image,
    };
    effects.push(Effect::ClassifyImage {
        request: request.clone(),
    });
    (
        Model {
            state: State::Analyzing { request },
            next_request_id: model.next_request_id + 1,
        },
        effects,
    )
}

fn show_output(
    config: &Config,
    with_state: impl Fn(State) -> Model,
    request: AnalyzeRequest,
    output: ClassifierOutput,
) -> (Model, Vec<Effect>) {
    match interpret(output.classifications.as_deref(), output.inference_time_ms) {
        Interpretation::NoResult => (
            with_state(State::ImageReady {
                image: request.image,
            }),
            finish(config, vec![Effect::toast(NO_RESULTS_MESSAGE)]),
        ),
        Interpretation::Verdict(verdict) => {
            let effects = vec![
                Effect::LogInfo {
                    message: format!(
                        "Filtered classification result ({}ms): {:?}",
                        output.inference_time_ms, verdict.filtered_text
                    ),
                },
                Effect::toast(verdict.sentence()),
            ];
            (
                with_state(State::ShowingResult {
                    image: request.image,
                    text: verdict.display,
                }),
                finish(config, effects),
            )
        }
    }
}

/// Headless runs stop after the first outcome.
fn finish(config: &Config, mut effects: Vec<Effect>) -> Vec<Effect> {
    if config.run_once {
        effects.push(Effect::Exit);
    }
    effects
}
