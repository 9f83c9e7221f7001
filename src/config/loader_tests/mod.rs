mod mock_fs;

mod cycle_detection_tests;
mod parsing_tests;
