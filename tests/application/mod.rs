mod csv_export_test;
