pub mod fitbit_client;
