mod shape_tests;
