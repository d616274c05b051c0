mod controls_render_tests;
