mod monitored_server;
