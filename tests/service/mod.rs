mod mess;
