#[cfg(test)]
mod core_test {
    use crate::analyzer::core::{
        init, transition, AnalyzeRequest, Effect, Event, Model, State, CROP_FAILED_MESSAGE,
        NO_IMAGE_MESSAGE, NO_RESULTS_MESSAGE,
    };
    use crate::analyzer::tests::fixture::output;
    use crate::config::Config;
    use crate::image_classifier::interface::ClassifierOutput;
    use crate::image_ref::ImageRef;
    use crate::result_interpreter::{
        NEGATIVE_SENTENCE, NO_CONFIDENT_CATEGORY_SENTENCE, POSITIVE_SENTENCE,
    };
    use crate::user_input::interface::UserInputEvent;

    fn model(state: State) -> Model {
        Model {
            state,
            next_request_id: 1,
        }
    }

    fn source() -> ImageRef {
        ImageRef::new("/photos/lesion.jpg")
    }

    fn cropped() -> ImageRef {
        ImageRef::new("/cache/cropped_image_1.jpg")
    }

    fn analyzing(id: u64) -> Model {
        Model {
            state: State::Analyzing {
                request: AnalyzeRequest {
                    id,
                    image: cropped(),
                },
            },
            next_request_id: id + 1,
        }
    }

    fn run_once() -> Config {
        Config {
            run_once: true,
            ..Config::default()
        }
    }

    #[test]
    fn test_init() {
        let (model, effects) = init(&Config::default());

        assert_eq!(model.state, State::NoImage);
        assert_eq!(effects, vec![Effect::SubscribeUserInput]);
    }

    #[test]
    fn test_init_run_once_picks_immediately() {
        let (model, effects) = init(&run_once());

        assert_eq!(model.state, State::Picking);
        assert_eq!(effects, vec![Effect::PickImage]);
    }

    #[test]
    fn test_pick_then_crop_flow() {
        let config = Config::default();

        let (state, effects) = transition(
            &config,
            model(State::NoImage),
            Event::UserInput(UserInputEvent::Gallery),
        );
        assert_eq!(state.state, State::Picking);
        assert_eq!(effects, vec![Effect::PickImage]);

        let (state, effects) = transition(&config, state, Event::PickDone(Ok(Some(source()))));
        assert_eq!(state.state, State::Cropping { source: source() });
        assert_eq!(effects, vec![Effect::CropImage { source: source() }]);

        let (state, effects) = transition(
            &config,
            state,
            Event::CropDone {
                source: source(),
                result: Ok(cropped()),
            },
        );
        assert_eq!(state.state, State::ImageReady { image: cropped() });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_pick_nothing_clears_image() {
        let (state, effects) = transition(
            &Config::default(),
            model(State::Picking),
            Event::PickDone(Ok(None)),
        );

        assert_eq!(state.state, State::NoImage);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_pick_error_is_toasted() {
        let (state, effects) = transition(
            &Config::default(),
            model(State::Picking),
            Event::PickDone(Err("Image not found: x.jpg".to_string())),
        );

        assert_eq!(state.state, State::NoImage);
        assert_eq!(
            effects,
            vec![Effect::ShowToast {
                message: "Image not found: x.jpg".to_string()
            }]
        );
    }

    #[test]
    fn test_crop_failure_keeps_source_image() {
        let (state, effects) = transition(
            &Config::default(),
            model(State::Cropping { source: source() }),
            Event::CropDone {
                source: source(),
                result: Err("unsupported format".to_string()),
            },
        );

        assert_eq!(state.state, State::ImageReady { image: source() });
        assert!(effects.contains(&Effect::ShowToast {
            message: CROP_FAILED_MESSAGE.to_string()
        }));
        assert!(effects
            .iter()
            .any(|e| matches!(e, Effect::LogError { message } if message.contains("unsupported format"))));
    }

    #[test]
    fn test_crop_result_for_other_source_is_ignored() {
        let before = model(State::Cropping { source: source() });

        let (state, effects) = transition(
            &Config::default(),
            before.clone(),
            Event::CropDone {
                source: ImageRef::new("/photos/older.jpg"),
                result: Ok(cropped()),
            },
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_analyze_without_image() {
        let (state, effects) = transition(
            &Config::default(),
            model(State::NoImage),
            Event::UserInput(UserInputEvent::Analyze),
        );

        assert_eq!(state.state, State::NoImage);
        assert_eq!(effects[0], Effect::ShowToast {
            message: NO_IMAGE_MESSAGE.to_string()
        });
        assert!(matches!(effects[1], Effect::LogError { .. }));
    }

    #[test]
    fn test_analyze_creates_request_with_next_id() {
        let before = Model {
            state: State::ImageReady { image: cropped() },
            next_request_id: 7,
        };

        let (state, effects) = transition(
            &Config::default(),
            before,
            Event::UserInput(UserInputEvent::Analyze),
        );

        let request = AnalyzeRequest {
            id: 7,
            image: cropped(),
        };
        assert_eq!(state.state, State::Analyzing {
            request: request.clone()
        });
        assert_eq!(state.next_request_id, 8);
        assert_eq!(effects, vec![Effect::ClassifyImage { request }]);
    }

    #[test]
    fn test_analyze_while_analyzing_is_ignored() {
        let before = analyzing(3);

        let (state, effects) = transition(
            &Config::default(),
            before.clone(),
            Event::UserInput(UserInputEvent::Analyze),
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_positive_verdict_moves_to_result() {
        let (state, effects) = transition(
            &Config::default(),
            analyzing(1),
            Event::ClassifyDone {
                request_id: 1,
                result: Ok(output(&[("Cancer", 0.92), ("Non Cancer", 0.08)])),
            },
        );

        assert_eq!(
            state.state,
            State::ShowingResult {
                image: cropped(),
                text: format!("Cancer: 92.0%\n\n{}", POSITIVE_SENTENCE),
            }
        );
        assert!(effects.contains(&Effect::ShowToast {
            message: POSITIVE_SENTENCE.to_string()
        }));
        assert!(!effects.contains(&Effect::Exit));
    }

    #[test]
    fn test_negative_verdict_across_heads() {
        let mut two_heads = output(&[("Other", 0.6)]);
        if let Some(classifications) = two_heads.classifications.as_mut() {
            classifications.extend(output(&[("Non Cancer", 0.75)]).classifications.unwrap());
        }

        let (state, _) = transition(
            &Config::default(),
            analyzing(1),
            Event::ClassifyDone {
                request_id: 1,
                result: Ok(two_heads),
            },
        );

        match state.state {
            State::ShowingResult { text, .. } => {
                assert_eq!(
                    text,
                    format!("Other: 60.0%\nNon Cancer: 75.0%\n\n{}", NEGATIVE_SENTENCE)
                );
            }
            other => panic!("Unexpected state: {:?}", other),
        }
    }

    #[test]
    fn test_low_confidence_still_shows_result() {
        let (state, effects) = transition(
            &Config::default(),
            analyzing(1),
            Event::ClassifyDone {
                request_id: 1,
                result: Ok(output(&[("Cancer", 0.3), ("Non Cancer", 0.2)])),
            },
        );

        assert_eq!(
            state.state,
            State::ShowingResult {
                image: cropped(),
                text: NO_CONFIDENT_CATEGORY_SENTENCE.to_string(),
            }
        );
        assert!(effects.contains(&Effect::ShowToast {
            message: NO_CONFIDENT_CATEGORY_SENTENCE.to_string()
        }));
    }

    #[test]
    fn test_absent_classifications_toast_no_results() {
        let (state, effects) = transition(
            &Config::default(),
            analyzing(1),
            Event::ClassifyDone {
                request_id: 1,
                result: Ok(ClassifierOutput {
                    classifications: None,
                    inference_time_ms: 3,
                }),
            },
        );

        assert_eq!(state.state, State::ImageReady { image: cropped() });
        assert_eq!(
            effects,
            vec![Effect::ShowToast {
                message: NO_RESULTS_MESSAGE.to_string()
            }]
        );
    }

    #[test]
    fn test_classifier_error_is_toasted() {
        let (state, effects) = transition(
            &Config::default(),
            analyzing(1),
            Event::ClassifyDone {
                request_id: 1,
                result: Err("model failed to load".to_string()),
            },
        );

        assert_eq!(state.state, State::ImageReady { image: cropped() });
        assert_eq!(
            effects,
            vec![Effect::ShowToast {
                message: "model failed to load".to_string()
            }]
        );
    }

    #[test]
    fn test_stale_classification_is_dropped() {
        let before = analyzing(2);

        let (state, effects) = transition(
            &Config::default(),
            before.clone(),
            Event::ClassifyDone {
                request_id: 1,
                result: Ok(output(&[("Cancer", 0.99)])),
            },
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_gallery_during_analysis_abandons_request() {
        let config = Config::default();

        let (state, effects) = transition(
            &config,
            analyzing(1),
            Event::UserInput(UserInputEvent::Gallery),
        );
        assert_eq!(state.state, State::Picking);
        assert_eq!(effects, vec![Effect::PickImage]);

        let (state, effects) = transition(
            &config,
            state,
            Event::ClassifyDone {
                request_id: 1,
                result: Ok(output(&[("Cancer", 0.99)])),
            },
        );
        assert_eq!(state.state, State::Picking);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_back_from_result() {
        let (state, effects) = transition(
            &Config::default(),
            model(State::ShowingResult {
                image: cropped(),
                text: "x".to_string(),
            }),
            Event::UserInput(UserInputEvent::Back),
        );

        assert_eq!(state.state, State::ImageReady { image: cropped() });
        assert!(effects.is_empty());
    }

    #[test]
    fn test_quit_from_anywhere() {
        for state in [
            State::NoImage,
            State::Picking,
            State::ImageReady { image: cropped() },
            analyzing(1).state,
        ] {
            let (after, effects) = transition(
                &Config::default(),
                model(state),
                Event::UserInput(UserInputEvent::Quit),
            );
            assert_eq!(after.state, State::Exiting);
            assert_eq!(effects, vec![Effect::Exit]);
        }
    }

    #[test]
    fn test_exiting_ignores_everything() {
        let before = model(State::Exiting);

        let (state, effects) = transition(
            &Config::default(),
            before.clone(),
            Event::UserInput(UserInputEvent::Gallery),
        );

        assert_eq!(state, before);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_run_once_crop_starts_analysis() {
        let (state, effects) = transition(
            &run_once(),
            model(State::Cropping { source: source() }),
            Event::CropDone {
                source: source(),
                result: Ok(cropped()),
            },
        );

        let request = AnalyzeRequest {
            id: 1,
            image: cropped(),
        };
        assert_eq!(state.state, State::Analyzing {
            request: request.clone()
        });
        assert_eq!(effects, vec![Effect::ClassifyImage { request }]);
    }

    #[test]
    fn test_run_once_exits_after_result() {
        let (state, effects) = transition(
            &run_once(),
            analyzing(1),
            Event::ClassifyDone {
                request_id: 1,
                result: Ok(output(&[("Cancer", 0.92)])),
            },
        );

        assert!(matches!(state.state, State::ShowingResult { .. }));
        assert_eq!(effects.last(), Some(&Effect::Exit));
    }

    #[test]
    fn test_run_once_exits_when_nothing_picked() {
        let (state, effects) =
            transition(&run_once(), model(State::Picking), Event::PickDone(Ok(None)));

        assert_eq!(state.state, State::NoImage);
        assert_eq!(effects, vec![Effect::Exit]);
    }
}
