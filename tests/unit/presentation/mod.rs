mod test_records;
