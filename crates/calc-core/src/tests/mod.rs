mod demo_tests;
