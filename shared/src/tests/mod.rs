mod offline_tests;
