mod document_writer_tests;
