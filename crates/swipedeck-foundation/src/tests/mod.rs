mod swipe_tests;
