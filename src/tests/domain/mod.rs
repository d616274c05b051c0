mod marker_tests;
