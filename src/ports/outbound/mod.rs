pub mod answer_service;
