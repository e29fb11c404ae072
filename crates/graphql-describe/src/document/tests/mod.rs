mod classified_document_tests;
