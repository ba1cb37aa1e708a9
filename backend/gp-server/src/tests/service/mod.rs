mod mock_store;
